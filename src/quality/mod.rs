//! Hypervolume quality indicator
//!
//! [`HyperVolume`] measures the volume of objective space dominated by a
//! solution set relative to a fixed reference point (minimization: a
//! point contributes only if it is strictly better than the reference in
//! every objective). Two-objective inputs use an exact sweep; higher
//! dimensions fall back to the WFG exclusive-volume recursion, which is
//! exact and comfortably fast at archive scale.

use crate::solution::Solution;

/// Hypervolume calculator with a fixed reference point
#[derive(Debug, Clone)]
pub struct HyperVolume {
    reference_point: Vec<f64>,
}

impl HyperVolume {
    /// Create a calculator for the given reference point
    pub fn new(reference_point: Vec<f64>) -> Self {
        Self { reference_point }
    }

    /// The reference point this calculator was constructed with
    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Compute the hypervolume of a solution set
    ///
    /// Solutions that do not strictly dominate the reference point are
    /// ignored; an empty or fully-irrelevant set yields 0.0.
    pub fn compute(&self, solutions: &[Solution]) -> f64 {
        let mut points: Vec<Vec<f64>> = solutions
            .iter()
            .map(|s| s.objectives.clone())
            .filter(|p| {
                p.len() == self.reference_point.len()
                    && p.iter().zip(&self.reference_point).all(|(v, r)| v < r)
            })
            .collect();

        if points.is_empty() {
            return 0.0;
        }

        points.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        points.dedup();

        if self.reference_point.len() == 2 {
            sweep_2d(&points, &self.reference_point)
        } else {
            wfg(&points, &self.reference_point)
        }
    }
}

/// Exact 2D hypervolume by a single sweep over points sorted by the
/// first objective. Dominated points contribute nothing because the
/// running minimum of the second objective absorbs them.
fn sweep_2d(sorted_points: &[Vec<f64>], reference: &[f64]) -> f64 {
    let mut volume = 0.0;
    let mut min_y = reference[1];
    for (i, p) in sorted_points.iter().enumerate() {
        let next_x = if i + 1 < sorted_points.len() {
            sorted_points[i + 1][0]
        } else {
            reference[0]
        };
        min_y = min_y.min(p[1]);
        volume += (next_x - p[0]) * (reference[1] - min_y);
    }
    volume
}

/// WFG exclusive-volume recursion: the hypervolume is the sum over points
/// of (inclusive volume) minus (hypervolume of the point's limit set).
fn wfg(points: &[Vec<f64>], reference: &[f64]) -> f64 {
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        let limited: Vec<Vec<f64>> = points[i + 1..]
            .iter()
            .map(|q| p.iter().zip(q).map(|(&a, &b)| a.max(b)).collect())
            .collect();
        total += inclusive_volume(p, reference) - wfg(&non_dominated_subset(limited), reference);
    }
    total
}

fn inclusive_volume(point: &[f64], reference: &[f64]) -> f64 {
    point.iter().zip(reference).map(|(v, r)| r - v).product()
}

fn non_dominated_subset(mut points: Vec<Vec<f64>>) -> Vec<Vec<f64>> {
    points.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    points.dedup();
    let mut kept: Vec<Vec<f64>> = Vec::with_capacity(points.len());
    for p in points {
        let dominated = kept.iter().any(|q| {
            q.iter().zip(&p).all(|(&a, &b)| a <= b) && q.iter().zip(&p).any(|(&a, &b)| a < b)
        });
        if !dominated {
            kept.retain(|q| {
                !(p.iter().zip(q).all(|(&a, &b)| a <= b)
                    && p.iter().zip(q).any(|(&a, &b)| a < b))
            });
            kept.push(p);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(objectives: Vec<f64>) -> Solution {
        let mut s = Solution::new(1, objectives.len());
        s.objectives = objectives;
        s
    }

    #[test]
    fn test_empty_set_is_zero() {
        let hv = HyperVolume::new(vec![1.0, 1.0]);
        assert_eq!(hv.compute(&[]), 0.0);
    }

    #[test]
    fn test_irrelevant_points_are_zero() {
        // Nothing strictly dominates a zero reference point
        let hv = HyperVolume::new(vec![0.0, 0.0]);
        let set = vec![solution(vec![0.2, 0.3])];
        assert_eq!(hv.compute(&set), 0.0);
    }

    #[test]
    fn test_single_point_2d() {
        let hv = HyperVolume::new(vec![1.0, 1.0]);
        let set = vec![solution(vec![0.25, 0.5])];
        assert!((hv.compute(&set) - 0.75 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_two_points_2d_union() {
        let hv = HyperVolume::new(vec![4.0, 4.0]);
        let set = vec![solution(vec![1.0, 3.0]), solution(vec![2.0, 2.0])];
        // Union of [1,4]x[3,4] and [2,4]x[2,4] less their overlap
        assert!((hv.compute(&set) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_dominated_point_adds_nothing() {
        let hv = HyperVolume::new(vec![4.0, 4.0]);
        let front = vec![solution(vec![1.0, 3.0]), solution(vec![2.0, 2.0])];
        let with_dominated = vec![
            solution(vec![1.0, 3.0]),
            solution(vec![2.0, 2.0]),
            solution(vec![3.0, 3.5]),
        ];
        assert!((hv.compute(&front) - hv.compute(&with_dominated)).abs() < 1e-12);
    }

    #[test]
    fn test_duplicate_points_count_once() {
        let hv = HyperVolume::new(vec![1.0, 1.0]);
        let once = vec![solution(vec![0.5, 0.5])];
        let twice = vec![solution(vec![0.5, 0.5]), solution(vec![0.5, 0.5])];
        assert!((hv.compute(&once) - hv.compute(&twice)).abs() < 1e-12);
    }

    #[test]
    fn test_more_spread_front_has_larger_volume() {
        let hv = HyperVolume::new(vec![1.0, 1.0]);
        let tight = vec![solution(vec![0.5, 0.5])];
        let spread = vec![
            solution(vec![0.1, 0.9]),
            solution(vec![0.5, 0.5]),
            solution(vec![0.9, 0.1]),
        ];
        assert!(hv.compute(&spread) > hv.compute(&tight));
    }

    #[test]
    fn test_single_point_3d() {
        let hv = HyperVolume::new(vec![1.0, 1.0, 1.0]);
        let set = vec![solution(vec![0.0, 0.0, 0.0])];
        assert!((hv.compute(&set) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_points_3d_union() {
        let hv = HyperVolume::new(vec![1.0, 1.0, 1.0]);
        let set = vec![
            solution(vec![0.5, 0.5, 0.5]),
            solution(vec![0.0, 0.0, 0.75]),
        ];
        // 0.125 + 0.25 - 0.0625 by inclusion-exclusion
        assert!((hv.compute(&set) - 0.3125).abs() < 1e-12);
    }
}
