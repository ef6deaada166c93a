use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use winnower::config::{MeasureKind, SelectionConfig, SelectionStrategy};
use winnower::data_handling::{Dataset, Record};
use winnower::pipeline::FeatureSelectionPipeline;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 60 records, 4 features: feature 2 is anti-correlated with the label
    // (largest magnitude), feature 0 weakly correlated, the rest noise.
    let mut rng = StdRng::seed_from_u64(7);
    let mut records = Vec::new();
    for i in 0..60 {
        let label = if i % 2 == 0 { 1.0 } else { -1.0 };
        let features = vec![
            0.4 * label + rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            -label + rng.gen_range(-0.2..0.2),
            rng.gen_range(-1.0..1.0),
        ];
        records.push(Record::new(label, features));
    }
    let dataset = Dataset::from_records(records)?;

    let config = SelectionConfig::new(
        2,
        SelectionStrategy::TopRelevance,
        MeasureKind::NormalizedMutualInfo { bins: 8 },
    );
    let outcome = FeatureSelectionPipeline::new(config).run(&dataset)?;

    println!("Top features by absolute class association:");
    for feature in &outcome.selection {
        println!("  feature {:>2}  score {:+.4}", feature.index, feature.score);
    }

    Ok(())
}
