//! Greedy minimum-Redundancy-Maximum-Relevance selection.

use rayon::prelude::*;

use crate::aggregation::{ClassRelevance, PairwiseRelevance};
use crate::error::SelectionError;
use crate::selection::SelectedFeature;

/// Greedy mRMR selector.
///
/// Each round scores every remaining candidate as its class relevance
/// minus its mean pairwise association with the already-selected features
/// and promotes the maximum. The first round has no selected features, so
/// the redundancy term is zero and the round reduces to an argmax over
/// class relevance.
///
/// Negative pairwise scores raise a candidate's combined score; that is
/// how the classic formula behaves and it is kept as-is.
pub struct MrmrSelector {
    n_features: usize,
}

/// Transient per-run state: selection order on one side, remaining
/// candidates (with their class relevance) on the other. The two move in
/// lockstep, one feature per round.
struct SelectionState {
    selected: Vec<SelectedFeature>,
    candidates: Vec<(usize, f64)>,
}

impl MrmrSelector {
    pub fn new(n_features: usize) -> Self {
        MrmrSelector { n_features }
    }

    /// Run the greedy selection to completion.
    ///
    /// Returns the selected features in selection order. Candidates are
    /// held in ascending index order and scored with a strict-maximum
    /// scan, so ties always resolve to the lowest feature index no matter
    /// how the maps were built or how the scoring was scheduled.
    pub fn select(
        &self,
        relevance: &ClassRelevance,
        redundancy: &PairwiseRelevance,
    ) -> Result<Vec<SelectedFeature>, SelectionError> {
        let available = relevance.len();
        if self.n_features == 0 || self.n_features > available {
            return Err(SelectionError::InvalidSelectionSize {
                requested: self.n_features,
                available,
            });
        }

        let mut state = SelectionState {
            selected: Vec::with_capacity(self.n_features),
            candidates: relevance.iter().collect(),
        };

        while state.selected.len() < self.n_features {
            let scores = score_candidates(&state, redundancy)?;
            let mut best_pos = 0;
            for (pos, &score) in scores.iter().enumerate().skip(1) {
                if score > scores[best_pos] {
                    best_pos = pos;
                }
            }
            let score = scores[best_pos];
            let (index, _) = state.candidates.remove(best_pos);
            log::trace!(
                "mRMR round {}: selected feature {} (score {:.6})",
                state.selected.len() + 1,
                index,
                score
            );
            state.selected.push(SelectedFeature { index, score });
        }

        Ok(state.selected)
    }
}

/// Combined score for every candidate, aligned with the candidate list.
///
/// Candidates are independent within a round, so the scan fans out across
/// threads; the order-preserving collect keeps the result aligned with
/// the ascending candidate order.
fn score_candidates(
    state: &SelectionState,
    redundancy: &PairwiseRelevance,
) -> Result<Vec<f64>, SelectionError> {
    state
        .candidates
        .par_iter()
        .map(|&(index, relevance)| {
            Ok(relevance - mean_redundancy(index, &state.selected, redundancy)?)
        })
        .collect()
}

/// Mean pairwise association between `candidate` and the selected set;
/// zero while nothing is selected. A missing pairwise entry aborts the
/// round rather than biasing it.
fn mean_redundancy(
    candidate: usize,
    selected: &[SelectedFeature],
    redundancy: &PairwiseRelevance,
) -> Result<f64, SelectionError> {
    if selected.is_empty() {
        return Ok(0.0);
    }
    let mut sum = 0.0;
    for feature in selected {
        sum += redundancy.score(candidate, feature.index)?;
    }
    Ok(sum / selected.len() as f64)
}
