use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for a feature selection run.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SelectionConfig {
    /// Number of features to keep. Validated against the dataset width
    /// before any computation starts.
    pub n_features: usize,

    pub strategy: SelectionStrategy,

    pub measure: MeasureKind,

    /// Seed threaded into measures that rely on stochastic estimation.
    /// Deterministic measures ignore it.
    pub seed: Option<u64>,
}

/// Selection strategies sharing the class-relevance substrate.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Greedy minimum-Redundancy-Maximum-Relevance. Also requires the
    /// pairwise feature-feature map.
    Mrmr,
    /// Top-N features by absolute class association.
    TopRelevance,
}

/// Supported association measures and their hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum MeasureKind {
    PearsonCorrelation,
    NormalizedMutualInfo { bins: usize },
    KsgMutualInfo { neighbors: usize },
}

impl Default for MeasureKind {
    fn default() -> Self {
        MeasureKind::PearsonCorrelation
    }
}

impl FromStr for MeasureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pearson" | "pearson-correlation" => Ok(MeasureKind::PearsonCorrelation),
            "nmi" | "normalized-mutual-info" => Ok(MeasureKind::NormalizedMutualInfo { bins: 10 }),
            "ksg" | "mi-regression" => Ok(MeasureKind::KsgMutualInfo { neighbors: 3 }),
            _ => Err(format!(
                "Unknown association measure: {}. Expected one of pearson, nmi, ksg",
                s
            )),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mrmr" => Ok(SelectionStrategy::Mrmr),
            "top-relevance" | "top-n" => Ok(SelectionStrategy::TopRelevance),
            _ => Err(format!(
                "Unknown selection strategy: {}. Expected mrmr or top-relevance",
                s
            )),
        }
    }
}

impl SelectionConfig {
    pub fn new(n_features: usize, strategy: SelectionStrategy, measure: MeasureKind) -> Self {
        Self {
            n_features,
            strategy,
            measure,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            n_features: 10,
            strategy: SelectionStrategy::Mrmr,
            measure: MeasureKind::PearsonCorrelation,
            seed: None,
        }
    }
}
