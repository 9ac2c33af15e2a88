//! Problem traits and built-in objective functions
//!
//! [`Problem`] is the seam between the optimizer and the objectives: it
//! supplies the search-space dimensions and bounds, constructs feasible
//! random solutions, and fills in objective vectors. All objectives are
//! minimized; constraints are expected to be encoded as penalty terms
//! inside the objectives (see [`penalty`]).

use anyhow::Result;
use rand::{Rng, RngCore};

use crate::solution::Solution;

pub mod habitability;
pub mod penalty;

/// A continuous multi-objective minimization problem
///
/// Implementations must be free of hidden cross-call state: evaluating a
/// solution may depend only on that solution's decision vector.
pub trait Problem: Send + Sync {
    /// Dimensionality of the decision space
    fn number_of_variables(&self) -> usize;

    /// Dimensionality of the objective space
    fn number_of_objectives(&self) -> usize;

    /// Lower bound of decision variable `j`
    fn lower_bound(&self, j: usize) -> f64;

    /// Upper bound of decision variable `j`
    fn upper_bound(&self, j: usize) -> f64;

    /// Human-readable problem name
    fn name(&self) -> &str {
        "unnamed"
    }

    /// Construct a solution with a uniformly random feasible decision vector
    ///
    /// Randomness is drawn from the supplied generator so that runs are
    /// reproducible under a fixed seed.
    fn create_solution(&self, rng: &mut dyn RngCore) -> Solution {
        let variables = (0..self.number_of_variables())
            .map(|j| rng.gen_range(self.lower_bound(j)..=self.upper_bound(j)))
            .collect();
        Solution::with_variables(variables, self.number_of_objectives())
    }

    /// Fill in the solution's objective vector
    fn evaluate(&self, solution: &mut Solution) -> Result<()>;
}
