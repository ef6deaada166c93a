//! Continuous mutual information via k-nearest-neighbor estimation
//! (Kraskov-Stogbauer-Grassberger, algorithm 1).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::function::gamma::digamma;
use statrs::statistics::Statistics;

use super::{check_samples, Association};
use crate::error::SelectionError;

/// Non-parametric MI estimate from continuous paired samples.
///
/// For each point, the distance to its k-th nearest neighbor in the joint
/// space (infinity norm) sets a radius; neighbor counts within that radius
/// in each marginal feed the digamma closed form. O(n^2) per group, which
/// is fine at the group sizes this crate targets.
///
/// When a seed is supplied, a tiny uniform jitter breaks ties between
/// duplicate samples. Samples are sorted into a canonical order before the
/// jitter is applied, so the score stays insensitive to sample arrival
/// order and reproducible for a given seed.
pub struct KsgMutualInfo {
    neighbors: usize,
    seed: Option<u64>,
}

impl KsgMutualInfo {
    pub fn new(neighbors: usize, seed: Option<u64>) -> Self {
        KsgMutualInfo { neighbors, seed }
    }
}

impl Association for KsgMutualInfo {
    fn score(&self, samples: &[(f64, f64)]) -> Result<f64, SelectionError> {
        check_samples(samples, self.name())?;
        let n = samples.len();
        let k = self.neighbors;
        if k == 0 {
            return Err(SelectionError::DegenerateAssociation {
                context: format!("{} requires at least 1 neighbor", self.name()),
            });
        }
        if n <= k {
            return Err(SelectionError::DegenerateAssociation {
                context: format!(
                    "{} requires more than {} samples, got {}",
                    self.name(),
                    k,
                    n
                ),
            });
        }

        let var_x = samples.iter().map(|s| s.0).population_variance();
        let var_y = samples.iter().map(|s| s.1).population_variance();
        if var_x <= 0.0 || var_y <= 0.0 {
            return Err(SelectionError::DegenerateAssociation {
                context: format!("{} given zero-variance input", self.name()),
            });
        }

        let mut points = samples.to_vec();
        points.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

        if let Some(seed) = self.seed {
            let scale = points
                .iter()
                .map(|(x, y)| x.abs().max(y.abs()))
                .fold(1.0, f64::max);
            let amplitude = 1e-10 * scale;
            let mut rng = StdRng::seed_from_u64(seed);
            for point in points.iter_mut() {
                point.0 += rng.gen_range(-amplitude..=amplitude);
                point.1 += rng.gen_range(-amplitude..=amplitude);
            }
        }

        let mut marginal_counts = 0.0;
        for i in 0..n {
            // k-th neighbor distance in the joint space (infinity norm)
            let mut joint_dists = Vec::with_capacity(n - 1);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = (points[i].0 - points[j].0).abs();
                let dy = (points[i].1 - points[j].1).abs();
                joint_dists.push(dx.max(dy));
            }
            joint_dists.sort_by(f64::total_cmp);
            let eps = joint_dists[k - 1];
            if eps <= 0.0 {
                return Err(SelectionError::DegenerateAssociation {
                    context: format!(
                        "{} found duplicate samples; supply a seed to break ties",
                        self.name()
                    ),
                });
            }

            let nx = points
                .iter()
                .enumerate()
                .filter(|(j, p)| i != *j && (points[i].0 - p.0).abs() < eps)
                .count();
            let ny = points
                .iter()
                .enumerate()
                .filter(|(j, p)| i != *j && (points[i].1 - p.1).abs() < eps)
                .count();
            marginal_counts += digamma(nx as f64 + 1.0) + digamma(ny as f64 + 1.0);
        }

        Ok(digamma(k as f64) + digamma(n as f64) - marginal_counts / n as f64)
    }

    fn name(&self) -> &str {
        "ksg-mutual-info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlated_exceeds_shuffled() {
        let xs: Vec<f64> = (0..40).map(|i| i as f64 / 40.0).collect();
        let correlated: Vec<(f64, f64)> = xs.iter().map(|&x| (x, x)).collect();
        let shuffled: Vec<(f64, f64)> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| (x, ((i * 17) % 40) as f64 / 40.0))
            .collect();

        let measure = KsgMutualInfo::new(3, None);
        let mi_corr = measure.score(&correlated).unwrap();
        let mi_shuf = measure.score(&shuffled).unwrap();
        assert!(mi_corr.is_finite() && mi_shuf.is_finite());
        assert!(mi_corr > mi_shuf);
    }

    #[test]
    fn too_few_samples_errors() {
        let samples = vec![(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)];
        let err = KsgMutualInfo::new(3, None).score(&samples).unwrap_err();
        assert!(matches!(err, SelectionError::DegenerateAssociation { .. }));
    }

    #[test]
    fn zero_neighbors_errors() {
        let samples: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, i as f64)).collect();
        let err = KsgMutualInfo::new(0, None).score(&samples).unwrap_err();
        assert!(matches!(err, SelectionError::DegenerateAssociation { .. }));
    }

    #[test]
    fn duplicates_without_seed_error() {
        let mut samples = vec![(1.0, 1.0); 5];
        samples.extend(vec![(2.0, 2.0); 5]);
        let err = KsgMutualInfo::new(3, None).score(&samples).unwrap_err();
        assert!(matches!(err, SelectionError::DegenerateAssociation { .. }));
    }

    #[test]
    fn seed_breaks_duplicate_ties() {
        let mut samples = vec![(1.0, 1.0); 5];
        samples.extend(vec![(2.0, 2.0); 5]);
        let mi = KsgMutualInfo::new(3, Some(7)).score(&samples).unwrap();
        assert!(mi.is_finite());
    }

    #[test]
    fn seeded_score_is_order_insensitive() {
        let forward: Vec<(f64, f64)> = (0..30).map(|i| (i as f64, (i * 3 % 7) as f64)).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        let measure = KsgMutualInfo::new(3, Some(42));
        assert_eq!(
            measure.score(&forward).unwrap(),
            measure.score(&reversed).unwrap()
        );
    }
}
