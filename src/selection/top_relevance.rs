//! Top-N selection by absolute class association.

use crate::aggregation::ClassRelevance;
use crate::error::SelectionError;
use crate::selection::SelectedFeature;

/// Selects the N features with the greatest `|score|`, ordered by
/// descending magnitude with ties broken by ascending feature index.
/// The reported scores keep their sign.
pub struct TopRelevanceSelector {
    n_features: usize,
}

impl TopRelevanceSelector {
    pub fn new(n_features: usize) -> Self {
        TopRelevanceSelector { n_features }
    }

    pub fn select(
        &self,
        relevance: &ClassRelevance,
    ) -> Result<Vec<SelectedFeature>, SelectionError> {
        let available = relevance.len();
        if self.n_features == 0 || self.n_features > available {
            return Err(SelectionError::InvalidSelectionSize {
                requested: self.n_features,
                available,
            });
        }

        let mut ranked: Vec<(usize, f64)> = relevance.iter().collect();
        ranked.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()).then(a.0.cmp(&b.0)));

        Ok(ranked
            .into_iter()
            .take(self.n_features)
            .map(|(index, score)| SelectedFeature { index, score })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::ClassRelevance;

    #[test]
    fn ranks_by_absolute_score() {
        let relevance =
            ClassRelevance::from_entries(vec![(0, 0.2), (1, -0.9), (2, 0.5), (3, -0.1)]);
        let result = TopRelevanceSelector::new(2).select(&relevance).unwrap();
        let indices: Vec<usize> = result.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 2]);
        // sign is preserved in the reported score
        assert!((result[0].score + 0.9).abs() < 1e-12);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let relevance = ClassRelevance::from_entries(vec![(0, -0.5), (1, 0.5), (2, 0.5)]);
        let result = TopRelevanceSelector::new(3).select(&relevance).unwrap();
        let indices: Vec<usize> = result.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn oversized_request_is_rejected() {
        let relevance = ClassRelevance::from_entries(vec![(0, 0.5)]);
        let err = TopRelevanceSelector::new(2).select(&relevance).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidSelectionSize { .. }));
    }
}
