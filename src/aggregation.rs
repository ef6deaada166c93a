//! Grouped aggregation of keyed samples into relevance maps.
//!
//! Samples from the melt stage are grouped by key, each group is scored
//! with the supplied association measure, and the results merge into
//! ordered maps keyed by feature index or canonical index pair. Grouping
//! order is arbitrary; the maps are built by key lookup only, so the
//! result does not depend on it. Scoring across groups is data-parallel:
//! groups share no mutable state and keys are disjoint by construction.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use rayon::prelude::*;

use crate::data_handling::Dataset;
use crate::error::SelectionError;
use crate::measures::Association;
use crate::pairing::{canonical_pair, class_pairs, feature_pairs};

/// Association score between each feature and the label.
/// Covers every feature index of the source dataset exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRelevance {
    scores: BTreeMap<usize, f64>,
}

impl ClassRelevance {
    pub fn score(&self, feature: usize) -> Option<f64> {
        self.scores.get(&feature).copied()
    }

    /// Iterate `(feature index, score)` in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().map(|(&idx, &score)| (idx, score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Association score between each unordered pair of distinct features,
/// keyed by canonical `(i, j)` with `i < j`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseRelevance {
    scores: BTreeMap<(usize, usize), f64>,
}

impl PairwiseRelevance {
    /// Score for the unordered pair `{a, b}`. The lookup canonicalizes the
    /// pair; a miss is an internal-consistency error, never defaulted.
    pub fn score(&self, a: usize, b: usize) -> Result<f64, SelectionError> {
        let (i, j) = canonical_pair(a, b);
        self.scores
            .get(&(i, j))
            .copied()
            .ok_or(SelectionError::MissingAssociationEntry { i, j })
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.scores.iter().map(|(&pair, &score)| (pair, score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<((usize, usize), f64)>) -> Self {
        PairwiseRelevance {
            scores: entries.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl ClassRelevance {
    pub(crate) fn from_entries(entries: Vec<(usize, f64)>) -> Self {
        ClassRelevance {
            scores: entries.into_iter().collect(),
        }
    }
}

/// Score every class-feature group of `dataset` with `measure`.
///
/// This is a materialization barrier: the returned map is complete (one
/// entry per feature index) and read-only afterwards.
pub fn class_relevance(
    dataset: &Dataset,
    measure: &dyn Association,
) -> Result<ClassRelevance, SelectionError> {
    let groups = group_by_key(class_pairs(dataset));
    log::debug!(
        "Scoring {} class-feature groups with {}",
        groups.len(),
        measure.name()
    );
    let scores = score_groups(groups, measure)?;
    debug_assert_eq!(scores.len(), dataset.n_features());
    Ok(ClassRelevance { scores })
}

/// Score every feature-feature group of `dataset` with `measure`.
///
/// Materializes `F * (F - 1) / 2` groups, each holding one sample per
/// record, so cost is quadratic in the dataset width.
pub fn pairwise_relevance(
    dataset: &Dataset,
    measure: &dyn Association,
) -> Result<PairwiseRelevance, SelectionError> {
    let width = dataset.n_features();
    let n_pairs = width * width.saturating_sub(1) / 2;
    if width > 100 {
        log::warn!(
            "Pairwise association over {} features materializes {} groups; expect quadratic cost",
            width,
            n_pairs
        );
    }
    let groups = group_by_key(feature_pairs(dataset));
    log::debug!(
        "Scoring {} feature-pair groups with {}",
        groups.len(),
        measure.name()
    );
    let scores = score_groups(groups, measure)?;
    debug_assert_eq!(scores.len(), n_pairs);
    Ok(PairwiseRelevance { scores })
}

/// Accumulate keyed samples into per-key groups. Arrival order is
/// irrelevant; every sample for a key ends up in that key's group.
fn group_by_key<K: Eq + Hash>(
    pairs: impl Iterator<Item = (K, (f64, f64))>,
) -> HashMap<K, Vec<(f64, f64)>> {
    let mut groups: HashMap<K, Vec<(f64, f64)>> = HashMap::new();
    for (key, sample) in pairs {
        groups.entry(key).or_default().push(sample);
    }
    groups
}

/// Apply `measure` to each group in parallel and merge into an ordered map.
fn score_groups<K>(
    groups: HashMap<K, Vec<(f64, f64)>>,
    measure: &dyn Association,
) -> Result<BTreeMap<K, f64>, SelectionError>
where
    K: Ord + Eq + Hash + Send + fmt::Debug,
{
    let groups: Vec<(K, Vec<(f64, f64)>)> = groups.into_iter().collect();
    groups
        .into_par_iter()
        .map(|(key, samples)| match measure.score(&samples) {
            Ok(score) => Ok((key, score)),
            Err(SelectionError::DegenerateAssociation { context }) => {
                Err(SelectionError::DegenerateAssociation {
                    context: format!("key {:?}: {}", key, context),
                })
            }
            Err(other) => Err(other),
        })
        .collect()
}
