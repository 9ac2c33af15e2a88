//! Pareto dominance and density estimation
//!
//! Dominance comparison and crowding-distance assignment (Deb et al.,
//! 2002) over [`Solution`] objective vectors. All objectives are
//! minimized: lower values are better.

use std::cmp::Ordering;

use crate::solution::Solution;

/// Outcome of a dominance comparison between two solutions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first solution dominates the second
    FirstDominates,
    /// The second solution dominates the first
    SecondDominates,
    /// Neither solution dominates the other
    NonDominated,
}

/// Compare two solutions for Pareto dominance (minimization)
///
/// A solution dominates another when it is no worse in every objective
/// and strictly better in at least one.
pub fn compare(a: &Solution, b: &Solution) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.objectives.iter().zip(&b.objectives) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::FirstDominates,
        (false, true) => Dominance::SecondDominates,
        _ => Dominance::NonDominated,
    }
}

/// Crowding distance assignment for diversity preservation
///
/// Measures how isolated each solution is in objective space. Boundary
/// solutions (min or max in any objective) receive `f64::INFINITY`;
/// interior solutions accumulate the normalized distance between their
/// neighbors along each objective. Sets of two or fewer solutions are
/// all treated as boundary.
pub fn crowding_distance(solutions: &[Solution]) -> Vec<f64> {
    let n = solutions.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = solutions[0].number_of_objectives();
    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..m {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            solutions[a].objectives[obj_idx]
                .partial_cmp(&solutions[b].objectives[obj_idx])
                .unwrap_or(Ordering::Equal)
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = solutions[indices[0]].objectives[obj_idx];
        let max_val = solutions[indices[n - 1]].objectives[obj_idx];
        let range = max_val - min_val;

        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = solutions[indices[i - 1]].objectives[obj_idx];
                let next = solutions[indices[i + 1]].objectives[obj_idx];
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

/// Rank two solutions by stored crowding distance
///
/// `Ordering::Less` means the first solution is preferred (less crowded).
/// Used by the archive's binary tournament: the winner is the operand
/// that does not compare `Greater`.
pub fn crowding_compare(a: &Solution, b: &Solution) -> Ordering {
    b.crowding_distance()
        .partial_cmp(&a.crowding_distance())
        .unwrap_or(Ordering::Equal)
}
