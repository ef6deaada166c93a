//! Feature selection strategies over precomputed relevance maps.
//!
//! Both selectors consume the maps produced by the aggregation stage:
//! greedy mRMR additionally needs the pairwise map, top-relevance only
//! the class map.
pub mod mrmr;
pub mod top_relevance;

use serde::{Deserialize, Serialize};

/// One selected feature, with its score at the time of selection.
///
/// For mRMR the score is the combined relevance-minus-redundancy value of
/// the round that picked the feature; for top-relevance it is the raw
/// class association score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedFeature {
    pub index: usize,
    pub score: f64,
}
