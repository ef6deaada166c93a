use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use winnower::config::{MeasureKind, SelectionConfig, SelectionStrategy};
use winnower::data_handling::{Dataset, Record};
use winnower::pipeline::FeatureSelectionPipeline;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Synthetic dataset: 80 records, 6 features.
    // Features 0 and 1 track the label (1 is a noisy copy of 0, so it is
    // redundant); features 2..6 are noise.
    let mut rng = StdRng::seed_from_u64(1);
    let mut records = Vec::new();
    for i in 0..80 {
        let label = if i % 2 == 0 { 1.0 } else { -1.0 };
        let informative = label + rng.gen_range(-0.3..0.3);
        let features = vec![
            informative,
            informative + rng.gen_range(-0.05..0.05),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ];
        records.push(Record::new(label, features));
    }
    let dataset = Dataset::from_records(records)?;

    let config = SelectionConfig::new(
        3,
        SelectionStrategy::Mrmr,
        MeasureKind::PearsonCorrelation,
    );
    let outcome = FeatureSelectionPipeline::new(config).run(&dataset)?;

    println!("Selected features (selection order):");
    for feature in &outcome.selection {
        println!("  feature {:>2}  score {:+.4}", feature.index, feature.score);
    }
    println!(
        "Reduced dataset: {} records x {} features",
        outcome.reduced.len(),
        outcome.reduced.n_features()
    );

    Ok(())
}
