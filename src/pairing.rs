//! Melt stage: expansion of a dataset into keyed paired samples.
//!
//! Both expansions are lazy, pure, and preserve feature and label values
//! exactly. Downstream grouping makes no assumption about the order in
//! which keyed samples arrive.

use crate::data_handling::Dataset;

/// Canonical form of an unordered feature index pair: `(min, max)`.
pub fn canonical_pair(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// For each record and each feature index `i`, yield
/// `(i, (label, features[i]))`. Produces `n_features` samples per record.
pub fn class_pairs(dataset: &Dataset) -> impl Iterator<Item = (usize, (f64, f64))> + '_ {
    dataset.records().iter().flat_map(|record| {
        record
            .features()
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i, (record.label(), value)))
    })
}

/// For each record and each unordered feature index pair `i < j`, yield
/// `((i, j), (features[i], features[j]))`.
///
/// Produces `n_features * (n_features - 1) / 2` samples per record. The
/// output volume is quadratic in the feature count, so this stage is only
/// suitable for datasets with small widths (tens of features, not
/// thousands).
pub fn feature_pairs(dataset: &Dataset) -> impl Iterator<Item = ((usize, usize), (f64, f64))> + '_ {
    let width = dataset.n_features();
    dataset.records().iter().flat_map(move |record| {
        let features = record.features();
        (0..width).flat_map(move |i| {
            ((i + 1)..width).map(move |j| ((i, j), (features[i], features[j])))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::Record;

    fn toy_dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(1.0, vec![1.0, 2.0, 3.0]),
            Record::new(-1.0, vec![4.0, 5.0, 6.0]),
        ])
        .unwrap()
    }

    #[test]
    fn canonical_pair_orders_endpoints() {
        assert_eq!(canonical_pair(2, 5), (2, 5));
        assert_eq!(canonical_pair(5, 2), (2, 5));
        assert_eq!(canonical_pair(3, 3), (3, 3));
    }

    #[test]
    fn class_pairs_yields_width_samples_per_record() {
        let ds = toy_dataset();
        let pairs: Vec<_> = class_pairs(&ds).collect();
        assert_eq!(pairs.len(), 2 * 3);
        assert_eq!(pairs[0], (0, (1.0, 1.0)));
        assert_eq!(pairs[4], (1, (-1.0, 5.0)));
    }

    #[test]
    fn feature_pairs_yields_all_canonical_pairs() {
        let ds = toy_dataset();
        let pairs: Vec<_> = feature_pairs(&ds).collect();
        // 3 * (3 - 1) / 2 pairs per record
        assert_eq!(pairs.len(), 2 * 3);
        assert_eq!(pairs[0], ((0, 1), (1.0, 2.0)));
        assert_eq!(pairs[2], ((1, 2), (2.0, 3.0)));
        assert!(pairs.iter().all(|((i, j), _)| i < j));
    }
}
