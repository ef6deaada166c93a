//! Pearson correlation coefficient over paired samples.

use ndarray::Array1;
use statrs::statistics::Statistics;

use super::{check_samples, Association};
use crate::error::SelectionError;

/// Pearson's r between the two components of a sample group.
///
/// Both components are centered; the score is the centered dot product
/// scaled by the component norms, in [-1, 1]. Zero-variance input is
/// rejected rather than coerced to 0, since the statistic is undefined
/// there.
pub struct PearsonCorrelation;

impl Association for PearsonCorrelation {
    fn score(&self, samples: &[(f64, f64)]) -> Result<f64, SelectionError> {
        check_samples(samples, self.name())?;

        let var_x = samples.iter().map(|s| s.0).population_variance();
        let var_y = samples.iter().map(|s| s.1).population_variance();
        if var_x <= 0.0 || var_y <= 0.0 {
            return Err(SelectionError::DegenerateAssociation {
                context: format!("{} given zero-variance input", self.name()),
            });
        }

        let n = samples.len() as f64;
        let xs = Array1::from_iter(samples.iter().map(|s| s.0));
        let ys = Array1::from_iter(samples.iter().map(|s| s.1));
        let mean_x = xs.sum() / n;
        let mean_y = ys.sum() / n;

        let centered_x = xs.mapv(|v| v - mean_x);
        let centered_y = ys.mapv(|v| v - mean_y);
        let x_norm = centered_x.dot(&centered_x).sqrt();
        let y_norm = centered_y.dot(&centered_y).sqrt();

        Ok(centered_x.dot(&centered_y) / (x_norm * y_norm))
    }

    fn name(&self) -> &str {
        "pearson-correlation"
    }
}
