//! Bounded leader archive
//!
//! [`CrowdingDistanceArchive`] maintains a capacity-bounded set of
//! mutually non-dominated solutions. When an insertion would exceed the
//! capacity, crowding distances are recomputed and the most crowded
//! member is evicted, preserving spread along the front. The archive is
//! both the optimizer's guidance set ("leaders") and its final result.

use std::cmp::Ordering;

use crate::pareto::{self, Dominance};
use crate::solution::Solution;

/// Bounded non-dominated archive pruned by crowding distance
#[derive(Debug, Clone)]
pub struct CrowdingDistanceArchive {
    capacity: usize,
    solutions: Vec<Solution>,
}

impl CrowdingDistanceArchive {
    /// Create an empty archive with a fixed capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity, solutions: Vec::with_capacity(capacity) }
    }

    /// Maximum number of members
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of members
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Whether the archive holds no members
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Read view of the archived solutions
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Offer a solution to the archive
    ///
    /// Rejected if any member dominates it or has an identical objective
    /// vector; otherwise members it dominates are evicted and it is
    /// inserted. Over-capacity insertions trigger a density-estimation
    /// pass and evict the most crowded member. Returns whether the
    /// solution was inserted.
    pub fn add(&mut self, solution: Solution) -> bool {
        for member in &self.solutions {
            match pareto::compare(member, &solution) {
                Dominance::FirstDominates => return false,
                Dominance::SecondDominates => {}
                Dominance::NonDominated => {
                    if member.same_objectives(&solution) {
                        return false;
                    }
                }
            }
        }

        self.solutions
            .retain(|member| pareto::compare(&solution, member) != Dominance::FirstDominates);
        self.solutions.push(solution);

        if self.solutions.len() > self.capacity {
            self.compute_density_estimator();
            self.evict_most_crowded();
        }
        true
    }

    /// Recompute crowding distances and store them on each member
    pub fn compute_density_estimator(&mut self) {
        let distances = pareto::crowding_distance(&self.solutions);
        for (member, distance) in self.solutions.iter_mut().zip(distances) {
            member.set_crowding_distance(distance);
        }
    }

    /// Rank two members for binary-tournament selection
    ///
    /// Delegates to the crowding comparator: `Ordering::Less` means the
    /// first member is preferred.
    pub fn compare(&self, a: &Solution, b: &Solution) -> Ordering {
        pareto::crowding_compare(a, b)
    }

    fn evict_most_crowded(&mut self) {
        let worst = self
            .solutions
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.crowding_distance()
                    .partial_cmp(&b.crowding_distance())
                    .unwrap_or(Ordering::Equal)
            })
            .map(|(i, _)| i);
        if let Some(i) = worst {
            self.solutions.remove(i);
        }
    }
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
    fn test_first_insertion_always_succeeds() {
        let mut archive = CrowdingDistanceArchive::new(4);
        assert!(archive.add(solution(vec![1.0, 1.0])));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_dominated_entrant_rejected() {
        let mut archive = CrowdingDistanceArchive::new(4);
        archive.add(solution(vec![1.0, 1.0]));
        assert!(!archive.add(solution(vec![2.0, 2.0])));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_dominating_entrant_evicts_members() {
        let mut archive = CrowdingDistanceArchive::new(4);
        archive.add(solution(vec![2.0, 2.0]));
        archive.add(solution(vec![3.0, 1.5]));
        assert!(archive.add(solution(vec![1.0, 1.0])));
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.solutions()[0].objectives, vec![1.0, 1.0]);
    }

    #[test]
    fn test_duplicate_objectives_rejected() {
        let mut archive = CrowdingDistanceArchive::new(4);
        archive.add(solution(vec![1.0, 2.0]));
        assert!(!archive.add(solution(vec![1.0, 2.0])));
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_capacity_enforced_by_crowding_eviction() {
        let mut archive = CrowdingDistanceArchive::new(3);
        // Non-dominated staircase of 5 points; only 3 may remain
        for i in 0..5 {
            archive.add(solution(vec![i as f64, 4.0 - i as f64]));
        }
        assert_eq!(archive.len(), 3);
        // Mutual non-domination must hold among survivors
        let members = archive.solutions();
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                assert_eq!(
                    pareto::compare(&members[i], &members[j]),
                    Dominance::NonDominated
                );
            }
        }
    }

    #[test]
    fn test_boundary_members_survive_pruning() {
        let mut archive = CrowdingDistanceArchive::new(2);
        for i in 0..5 {
            archive.add(solution(vec![i as f64, 4.0 - i as f64]));
        }
        // Boundary points have infinite crowding distance and are kept
        let objectives: Vec<f64> =
            archive.solutions().iter().map(|s| s.objectives[0]).collect();
        assert!(objectives.contains(&0.0));
        assert!(objectives.contains(&4.0));
    }

    #[test]
    fn test_reinsertion_is_idempotent() {
        let mut archive = CrowdingDistanceArchive::new(5);
        for i in 0..5 {
            archive.add(solution(vec![i as f64, 4.0 - i as f64]));
        }
        let snapshot: Vec<Solution> = archive.solutions().to_vec();

        let mut fresh = CrowdingDistanceArchive::new(5);
        for member in &snapshot {
            fresh.add(member.clone());
        }
        for member in &snapshot {
            fresh.add(member.clone());
        }
        assert_eq!(fresh.len(), snapshot.len());
    }

    #[test]
    fn test_density_estimator_writes_attributes() {
        let mut archive = CrowdingDistanceArchive::new(4);
        for i in 0..3 {
            archive.add(solution(vec![i as f64, 2.0 - i as f64]));
        }
        archive.compute_density_estimator();
        assert!(archive.solutions()[0].crowding_distance().is_infinite());
    }
}
