//! Association measures.
//!
//! This module centralizes the contract between the aggregation stage and
//! the statistics that score a group of paired samples, plus three
//! built-in measures. Callers may plug in their own implementation; the
//! built-ins cover the correlation and mutual-information variants used
//! by the selection strategies.
pub mod ksg;
pub mod mutual_info;
pub mod pearson;

use crate::config::{MeasureKind, SelectionConfig};
use crate::error::SelectionError;

/// A small trait abstraction for association measures used by the
/// aggregation stage. Implementations must be pure, deterministic, and
/// insensitive to the ordering of the samples within a group.
pub trait Association: Send + Sync {
    /// Score the association between the two aligned components of
    /// `samples`. Degenerate input (fewer than two samples, undefined
    /// statistic) must surface as an error, never as a silent 0 or NaN.
    fn score(&self, samples: &[(f64, f64)]) -> Result<f64, SelectionError>;

    /// Human readable name for logging.
    fn name(&self) -> &str {
        "association"
    }
}

/// Build a boxed measure from a run configuration.
/// The configured seed is threaded into measures that rely on stochastic
/// estimation; deterministic measures ignore it.
pub fn build_measure(config: &SelectionConfig) -> Box<dyn Association> {
    match config.measure {
        MeasureKind::PearsonCorrelation => Box::new(pearson::PearsonCorrelation),
        MeasureKind::NormalizedMutualInfo { bins } => {
            Box::new(mutual_info::NormalizedMutualInfo::new(bins))
        }
        MeasureKind::KsgMutualInfo { neighbors } => {
            Box::new(ksg::KsgMutualInfo::new(neighbors, config.seed))
        }
    }
}

/// Shared input guard: at least two samples, all values finite.
pub(crate) fn check_samples(
    samples: &[(f64, f64)],
    measure: &str,
) -> Result<(), SelectionError> {
    if samples.len() < 2 {
        return Err(SelectionError::DegenerateAssociation {
            context: format!(
                "{} requires at least 2 samples, got {}",
                measure,
                samples.len()
            ),
        });
    }
    if samples
        .iter()
        .any(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(SelectionError::DegenerateAssociation {
            context: format!("{} received non-finite sample values", measure),
        });
    }
    Ok(())
}
