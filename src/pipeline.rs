//! End-to-end orchestration of a feature selection run.
//!
//! Drives the stages in order: validate the request, compute the
//! relevance maps (the pairwise map only when the strategy needs it),
//! run the configured selector, and project the dataset onto the
//! selected indices.

use crate::aggregation::{class_relevance, pairwise_relevance};
use crate::config::{SelectionConfig, SelectionStrategy};
use crate::data_handling::Dataset;
use crate::error::SelectionError;
use crate::measures::build_measure;
use crate::selection::mrmr::MrmrSelector;
use crate::selection::top_relevance::TopRelevanceSelector;
use crate::selection::SelectedFeature;

/// Result of a pipeline run: the ordered selection and the input dataset
/// reduced to the selected features.
#[derive(Debug, Clone)]
pub struct SelectionOutcome {
    pub selection: Vec<SelectedFeature>,
    pub reduced: Dataset,
}

impl SelectionOutcome {
    /// Selected feature indices in selection order.
    pub fn indices(&self) -> Vec<usize> {
        self.selection.iter().map(|f| f.index).collect()
    }
}

pub struct FeatureSelectionPipeline {
    config: SelectionConfig,
}

impl FeatureSelectionPipeline {
    pub fn new(config: SelectionConfig) -> Self {
        FeatureSelectionPipeline { config }
    }

    /// Run selection over `dataset` per the pipeline configuration.
    ///
    /// The selection size is validated before any association work starts.
    /// Both relevance maps are fully materialized before the selector
    /// runs; they are read-only from then on.
    pub fn run(&self, dataset: &Dataset) -> Result<SelectionOutcome, SelectionError> {
        let available = dataset.n_features();
        if self.config.n_features == 0 || self.config.n_features > available {
            return Err(SelectionError::InvalidSelectionSize {
                requested: self.config.n_features,
                available,
            });
        }

        dataset.log_input_data_summary();
        let measure = build_measure(&self.config);
        log::info!(
            "Computing class relevance for {} features with {}",
            available,
            measure.name()
        );
        let relevance = class_relevance(dataset, measure.as_ref())?;

        let selection = match self.config.strategy {
            SelectionStrategy::Mrmr => {
                log::info!("Computing pairwise relevance over {} features", available);
                let redundancy = pairwise_relevance(dataset, measure.as_ref())?;
                MrmrSelector::new(self.config.n_features).select(&relevance, &redundancy)?
            }
            SelectionStrategy::TopRelevance => {
                TopRelevanceSelector::new(self.config.n_features).select(&relevance)?
            }
        };

        let indices: Vec<usize> = selection.iter().map(|f| f.index).collect();
        log::info!("Selected features (in selection order): {:?}", indices);

        Ok(SelectionOutcome {
            reduced: dataset.project(&indices),
            selection,
        })
    }
}
