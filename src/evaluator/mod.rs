//! Swarm evaluators
//!
//! An [`Evaluator`] maps a population through the problem's objective
//! function, mutating objective vectors in place so that order and
//! cardinality are preserved by construction. The evaluator is the sole
//! pluggable point of parallelism in the crate: [`ParallelEvaluator`]
//! fans the population out over Rayon's thread pool, and control does
//! not return to the engine until every member has been evaluated.

use anyhow::Result;
use rayon::prelude::*;

use crate::problem::Problem;
use crate::solution::Solution;

/// Evaluates every solution in a population
pub trait Evaluator: Send + Sync {
    /// Fill in the objective vector of every solution in the slice
    fn evaluate(&self, population: &mut [Solution], problem: &dyn Problem) -> Result<()>;
}

/// Evaluates solutions one at a time on the calling thread
#[derive(Debug, Clone, Default)]
pub struct SequentialEvaluator;

impl Evaluator for SequentialEvaluator {
    fn evaluate(&self, population: &mut [Solution], problem: &dyn Problem) -> Result<()> {
        for solution in population.iter_mut() {
            problem.evaluate(solution)?;
        }
        Ok(())
    }
}

/// Evaluates solutions in parallel on Rayon's thread pool
///
/// Worthwhile when a single objective evaluation is expensive relative
/// to the thread-pool dispatch overhead.
#[derive(Debug, Clone, Default)]
pub struct ParallelEvaluator;

impl Evaluator for ParallelEvaluator {
    fn evaluate(&self, population: &mut [Solution], problem: &dyn Problem) -> Result<()> {
        population
            .par_iter_mut()
            .try_for_each(|solution| problem.evaluate(solution))
    }
}
