//! Integration tests for the melt + grouped aggregation stages.

use winnower::aggregation::{class_relevance, pairwise_relevance};
use winnower::data_handling::{Dataset, Record};
use winnower::error::SelectionError;
use winnower::measures::pearson::PearsonCorrelation;
use winnower::pairing::{class_pairs, feature_pairs};

fn dataset(width: usize, n_records: usize) -> Dataset {
    // Deterministic non-degenerate values: every feature varies across
    // records and no two features are identical.
    let records = (0..n_records)
        .map(|r| {
            let label = if r % 2 == 0 { 1.0 } else { -1.0 };
            let features = (0..width)
                .map(|f| ((r * (f + 2) + f) % 11) as f64 + 0.5 * f as f64)
                .collect();
            Record::new(label, features)
        })
        .collect();
    Dataset::from_records(records).unwrap()
}

// ---------------------------------------------------------------------------
// Melt stage output volume
// ---------------------------------------------------------------------------

#[test]
fn class_pairs_volume_is_width_times_records() {
    let ds = dataset(5, 8);
    assert_eq!(class_pairs(&ds).count(), 5 * 8);
}

#[test]
fn feature_pairs_volume_is_quadratic() {
    let ds = dataset(5, 8);
    assert_eq!(feature_pairs(&ds).count(), 8 * (5 * 4 / 2));
}

// ---------------------------------------------------------------------------
// Map key domains
// ---------------------------------------------------------------------------

#[test]
fn class_relevance_domain_is_exactly_all_features() {
    for width in [1, 2, 3, 6] {
        let ds = dataset(width, 10);
        let relevance = class_relevance(&ds, &PearsonCorrelation).unwrap();
        let keys: Vec<usize> = relevance.iter().map(|(idx, _)| idx).collect();
        assert_eq!(keys, (0..width).collect::<Vec<_>>());
    }
}

#[test]
fn pairwise_relevance_domain_is_exactly_all_canonical_pairs() {
    for width in [2, 3, 6] {
        let ds = dataset(width, 10);
        let pairwise = pairwise_relevance(&ds, &PearsonCorrelation).unwrap();
        assert_eq!(pairwise.len(), width * (width - 1) / 2);
        for ((i, j), _) in pairwise.iter() {
            assert!(i < j, "non-canonical key ({}, {})", i, j);
        }
        // every unordered pair resolves, in either orientation
        for i in 0..width {
            for j in 0..width {
                if i != j {
                    assert!(pairwise.score(i, j).is_ok());
                }
            }
        }
    }
}

#[test]
fn single_feature_dataset_has_empty_pairwise_map() {
    let ds = dataset(1, 10);
    let pairwise = pairwise_relevance(&ds, &PearsonCorrelation).unwrap();
    assert!(pairwise.is_empty());
}

// ---------------------------------------------------------------------------
// Degenerate propagation
// ---------------------------------------------------------------------------

#[test]
fn constant_feature_aborts_class_relevance() {
    let ds = Dataset::from_records(vec![
        Record::new(1.0, vec![1.0, 3.0]),
        Record::new(-1.0, vec![2.0, 3.0]),
        Record::new(1.0, vec![3.0, 3.0]),
    ])
    .unwrap();
    let err = class_relevance(&ds, &PearsonCorrelation).unwrap_err();
    assert!(matches!(err, SelectionError::DegenerateAssociation { .. }));
}

#[test]
fn single_record_dataset_aborts() {
    // One sample per group is below the minimum for any association.
    let ds = Dataset::from_records(vec![Record::new(1.0, vec![1.0, 2.0])]).unwrap();
    let err = class_relevance(&ds, &PearsonCorrelation).unwrap_err();
    assert!(matches!(err, SelectionError::DegenerateAssociation { .. }));
}

// ---------------------------------------------------------------------------
// Determinism of map construction
// ---------------------------------------------------------------------------

#[test]
fn repeated_aggregation_is_identical() {
    let ds = dataset(6, 12);
    let a = pairwise_relevance(&ds, &PearsonCorrelation).unwrap();
    let b = pairwise_relevance(&ds, &PearsonCorrelation).unwrap();
    assert_eq!(a, b);
}
