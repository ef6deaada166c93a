//! Normalized mutual information over equal-width binned samples.

use statrs::statistics::Statistics;

use super::{check_samples, Association};
use crate::error::SelectionError;

/// Mutual information between the two components of a sample group,
/// estimated from an equal-width joint histogram and normalized by the
/// arithmetic mean of the marginal entropies, so the score lands in
/// [0, 1] with 1 for identical variables.
pub struct NormalizedMutualInfo {
    bins: usize,
}

impl NormalizedMutualInfo {
    pub fn new(bins: usize) -> Self {
        NormalizedMutualInfo { bins }
    }
}

impl Association for NormalizedMutualInfo {
    fn score(&self, samples: &[(f64, f64)]) -> Result<f64, SelectionError> {
        check_samples(samples, self.name())?;
        if self.bins < 2 {
            return Err(SelectionError::DegenerateAssociation {
                context: format!("{} requires at least 2 bins, got {}", self.name(), self.bins),
            });
        }
        let var_x = samples.iter().map(|s| s.0).population_variance();
        let var_y = samples.iter().map(|s| s.1).population_variance();
        if var_x <= 0.0 || var_y <= 0.0 {
            return Err(SelectionError::DegenerateAssociation {
                context: format!("{} given zero-variance input", self.name()),
            });
        }

        let xs = bin_values(samples.iter().map(|s| s.0), self.bins);
        let ys = bin_values(samples.iter().map(|s| s.1), self.bins);

        // Joint and marginal histograms over bin indices.
        let mut joint = vec![0usize; self.bins * self.bins];
        let mut marginal_x = vec![0usize; self.bins];
        let mut marginal_y = vec![0usize; self.bins];
        for (&bx, &by) in xs.iter().zip(ys.iter()) {
            joint[bx * self.bins + by] += 1;
            marginal_x[bx] += 1;
            marginal_y[by] += 1;
        }

        let n = samples.len() as f64;
        let h_x = entropy(&marginal_x, n);
        let h_y = entropy(&marginal_y, n);
        if h_x <= 0.0 || h_y <= 0.0 {
            return Err(SelectionError::DegenerateAssociation {
                context: format!("{} marginal entropy is zero after binning", self.name()),
            });
        }

        let mut mutual_info = 0.0;
        for bx in 0..self.bins {
            for by in 0..self.bins {
                let count = joint[bx * self.bins + by];
                if count == 0 {
                    continue;
                }
                let p_xy = count as f64 / n;
                let p_x = marginal_x[bx] as f64 / n;
                let p_y = marginal_y[by] as f64 / n;
                mutual_info += p_xy * (p_xy / (p_x * p_y)).ln();
            }
        }

        Ok(mutual_info / ((h_x + h_y) / 2.0))
    }

    fn name(&self) -> &str {
        "normalized-mutual-info"
    }
}

/// Map values to equal-width bin indices over their observed range.
/// The maximum value lands in the last bin.
fn bin_values(values: impl Iterator<Item = f64> + Clone, bins: usize) -> Vec<usize> {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    values
        .map(|v| {
            let idx = ((v - min) / range * bins as f64) as usize;
            idx.min(bins - 1)
        })
        .collect()
}

fn entropy(counts: &[usize], n: f64) -> f64 {
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.ln()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_variables_score_one() {
        let samples: Vec<(f64, f64)> = (0..40).map(|i| (i as f64, i as f64)).collect();
        let nmi = NormalizedMutualInfo::new(4).score(&samples).unwrap();
        assert!((nmi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn independent_variables_score_low() {
        // x cycles through bins while y stays anti-aligned with the cycle;
        // the joint distribution factorizes over a full period.
        let samples: Vec<(f64, f64)> = (0..64)
            .map(|i| ((i % 4) as f64, ((i / 4) % 4) as f64))
            .collect();
        let nmi = NormalizedMutualInfo::new(4).score(&samples).unwrap();
        assert!(nmi.abs() < 1e-9);
    }

    #[test]
    fn zero_variance_errors() {
        let samples = vec![(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)];
        let err = NormalizedMutualInfo::new(4).score(&samples).unwrap_err();
        assert!(matches!(err, SelectionError::DegenerateAssociation { .. }));
    }

    #[test]
    fn too_few_bins_errors() {
        let samples = vec![(1.0, 1.0), (2.0, 2.0)];
        let err = NormalizedMutualInfo::new(1).score(&samples).unwrap_err();
        assert!(matches!(err, SelectionError::DegenerateAssociation { .. }));
    }

    #[test]
    fn order_insensitive() {
        let forward: Vec<(f64, f64)> = (0..20).map(|i| (i as f64, (i * i) as f64)).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        let measure = NormalizedMutualInfo::new(5);
        assert_eq!(
            measure.score(&forward).unwrap(),
            measure.score(&reversed).unwrap()
        );
    }
}
