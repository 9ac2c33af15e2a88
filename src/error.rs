//! Error taxonomy
//!
//! Three failure classes: configuration rejected up front, evaluation
//! failures surfaced verbatim from the problem or evaluator, and archive
//! capacity violations, which indicate a broken collaborator contract.
//! The engine never retries and yields no partial results.

use thiserror::Error;

/// Errors surfaced by the optimizer
#[derive(Debug, Error)]
pub enum MoqpsoError {
    /// Rejected configuration: non-positive sizes or a reference point
    /// whose dimensionality does not match the problem
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// An objective evaluation failed; the underlying cause is passed
    /// through unmodified
    #[error("evaluation failed")]
    Evaluation(#[from] anyhow::Error),

    /// The leader archive exceeded its fixed capacity, which cannot
    /// happen while the archive honors its contract
    #[error("leader archive exceeded capacity: {size} > {capacity}")]
    ArchiveCapacityViolation {
        /// Observed archive size
        size: usize,
        /// Configured capacity
        capacity: usize,
    },
}
