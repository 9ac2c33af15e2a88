//! MOQPSO configuration
//!
//! Run-scoped parameters with validation and builder-style setters.

use serde::{Deserialize, Serialize};

use crate::error::MoqpsoError;

/// Configuration for a MOQPSO run
///
/// Defaults mirror the settings the habitability benchmarks were run
/// with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoqpsoConfig {
    /// Number of particles in the swarm; fixed for the run's lifetime
    pub swarm_size: usize,

    /// Generation budget. Despite the name, one unit is one generation
    /// of the whole swarm, not one objective-function call.
    pub max_evaluations: usize,

    /// Seed for the run's random generator; `None` seeds from entropy.
    /// Two runs with the same seed, configuration, and problem produce
    /// identical swarms at every generation.
    pub seed: Option<u64>,
}

impl Default for MoqpsoConfig {
    fn default() -> Self {
        Self { swarm_size: 100, max_evaluations: 100_000, seed: None }
    }
}

impl MoqpsoConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), MoqpsoError> {
        if self.swarm_size == 0 {
            return Err(MoqpsoError::InvalidConfiguration(
                "swarm_size must be positive".into(),
            ));
        }
        if self.max_evaluations == 0 {
            return Err(MoqpsoError::InvalidConfiguration(
                "max_evaluations must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Set the swarm size
    pub fn swarm_size(mut self, size: usize) -> Self {
        self.swarm_size = size;
        self
    }

    /// Set the generation budget
    pub fn max_evaluations(mut self, budget: usize) -> Self {
        self.max_evaluations = budget;
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
