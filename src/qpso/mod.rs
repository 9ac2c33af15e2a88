//! Multi-objective quantum-behaved PSO
//!
//! The engine itself ([`Moqpso`]), its configuration, and the
//! hypervolume bookkeeping that drives the stagnation stop.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::MoqpsoConfig;
pub use engine::{Moqpso, RunState, CONTRACTION_EXPANSION};
pub use stats::{HypervolumeTracker, STAGNATION_EPSILON};
