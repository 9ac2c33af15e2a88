//! # moqpso
//!
//! Multi-objective quantum-behaved particle swarm optimization.
//!
//! The engine searches a bounded continuous decision space for an
//! approximation of the Pareto-optimal front of a vector-valued
//! objective function. Particles jump quantum-style around attractors
//! between their personal bests and tournament-selected leaders from a
//! bounded crowding-distance archive; the archive is the result. Runs
//! stop on a generation budget or on hypervolume stagnation.
//!
//! ## Quick Start
//!
//! ```rust
//! use moqpso::prelude::*;
//!
//! let problem = CdhProblem::crs(1.83, 1.19, 1.99, 0.95);
//! let config = MoqpsoConfig::new()
//!     .swarm_size(50)
//!     .max_evaluations(500)
//!     .seed(42);
//!
//! let mut engine = Moqpso::new(
//!     problem,
//!     config,
//!     Box::new(PolynomialMutation::new(0.3, 20.0)),
//!     CrowdingDistanceArchive::new(100),
//!     Box::new(SequentialEvaluator),
//!     vec![0.0, 0.0],
//! )
//! .unwrap();
//!
//! engine.run().unwrap();
//! let front = engine.get_result();
//! assert!(front.len() <= 100);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Bounded non-dominated leader archive
pub mod archive;

/// Error taxonomy
pub mod error;

/// Population evaluators (sequential and Rayon-parallel)
pub mod evaluator;

/// Mutation operators
pub mod operator;

/// Dominance comparison and crowding-distance density estimation
pub mod pareto;

/// Problem trait and built-in habitability objectives
pub mod problem;

/// The MOQPSO engine
pub mod qpso;

/// Hypervolume quality indicator
pub mod quality;

/// Candidate solution representation
pub mod solution;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::archive::CrowdingDistanceArchive;
    pub use crate::error::MoqpsoError;
    pub use crate::evaluator::{Evaluator, ParallelEvaluator, SequentialEvaluator};
    pub use crate::operator::{MutationOperator, PolynomialMutation, UniformMutation};
    pub use crate::pareto::Dominance;
    pub use crate::problem::habitability::{CdhForm, CdhProblem};
    pub use crate::problem::Problem;
    pub use crate::qpso::{Moqpso, MoqpsoConfig, RunState};
    pub use crate::quality::HyperVolume;
    pub use crate::solution::Solution;
}

/// Current version of moqpso
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
