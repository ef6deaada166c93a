//! Data structures for labeled tabular datasets.
//!
//! This module defines `Record` and `Dataset` and contains the projection
//! helpers that reduce records onto a selected feature subset after a
//! selection run.

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;

/// A single labeled instance: a scalar label plus a fixed-length numeric
/// feature vector. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    label: f64,
    features: Vec<f64>,
}

impl Record {
    pub fn new(label: f64, features: Vec<f64>) -> Self {
        Record { label, features }
    }

    pub fn label(&self) -> f64 {
        self.label
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Project the record onto `indices`, in the given order.
    ///
    /// The output feature vector is `[features[idx] for idx in indices]`;
    /// the label is preserved exactly. Indices must be valid for this
    /// record's width; they come from a selection over the same dataset.
    pub fn project(&self, indices: &[usize]) -> Record {
        Record {
            label: self.label,
            features: indices.iter().map(|&idx| self.features[idx]).collect(),
        }
    }
}

/// An unordered collection of records with a uniform feature count.
///
/// The feature count is derived from the first record at construction and
/// enforced for every other record; downstream stages never re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    n_features: usize,
}

impl Dataset {
    /// Build a dataset, validating that every record has the same number
    /// of features as the first.
    pub fn from_records(records: Vec<Record>) -> Result<Self, SelectionError> {
        let Some(first) = records.first() else {
            return Err(SelectionError::EmptyDataset);
        };
        let n_features = first.n_features();
        for (i, record) in records.iter().enumerate() {
            if record.n_features() != n_features {
                return Err(SelectionError::InconsistentFeatureLength {
                    record: i,
                    expected: n_features,
                    found: record.n_features(),
                });
            }
        }
        Ok(Dataset {
            records,
            n_features,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project every record onto `indices` (see [`Record::project`]).
    /// The resulting dataset has width `indices.len()`.
    pub fn project(&self, indices: &[usize]) -> Dataset {
        Dataset {
            records: self.records.iter().map(|r| r.project(indices)).collect(),
            n_features: indices.len(),
        }
    }

    pub fn log_input_data_summary(&self) {
        log::info!(
            "Input data: {} records x {} features ({} positive labels)",
            self.len(),
            self.n_features,
            self.records.iter().filter(|r| r.label() > 0.0).count()
        );
    }
}
