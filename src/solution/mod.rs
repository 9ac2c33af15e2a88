//! Candidate solution representation
//!
//! A [`Solution`] pairs a continuous decision vector with its objective
//! vector and a small numeric attribute bag used by collaborators for
//! bookkeeping (crowding distance, constraint violation). Snapshots taken
//! by the engine or the archive are always explicit clones, so mutating a
//! swarm member in place never alters an archived copy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attribute key under which the archive stores crowding distance.
pub const CROWDING_DISTANCE: &str = "crowding_distance";

/// Attribute key for aggregate constraint violation, written by problems
/// that track it.
pub const CONSTRAINT_VIOLATION: &str = "overall_constraint_violation";

/// A candidate solution to a continuous multi-objective problem
///
/// All objectives are minimized. The attribute bag is free-form numeric
/// storage; the crate itself only reads [`CROWDING_DISTANCE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Decision variables, one per problem dimension
    pub variables: Vec<f64>,

    /// Objective values, filled in by evaluation
    pub objectives: Vec<f64>,

    /// Auxiliary numeric attributes keyed by name
    pub attributes: HashMap<String, f64>,
}

impl Solution {
    /// Create a zero-initialized solution of the given dimensions
    pub fn new(number_of_variables: usize, number_of_objectives: usize) -> Self {
        Self {
            variables: vec![0.0; number_of_variables],
            objectives: vec![0.0; number_of_objectives],
            attributes: HashMap::new(),
        }
    }

    /// Create a solution from an existing decision vector
    pub fn with_variables(variables: Vec<f64>, number_of_objectives: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; number_of_objectives],
            attributes: HashMap::new(),
        }
    }

    /// Number of decision variables
    pub fn number_of_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of objectives
    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    /// Stored crowding distance, or 0.0 if none has been assigned yet
    pub fn crowding_distance(&self) -> f64 {
        self.attributes.get(CROWDING_DISTANCE).copied().unwrap_or(0.0)
    }

    /// Store a crowding distance in the attribute bag
    pub fn set_crowding_distance(&mut self, distance: f64) {
        self.attributes.insert(CROWDING_DISTANCE.to_string(), distance);
    }

    /// Check whether two solutions have identical objective vectors
    pub fn same_objectives(&self, other: &Solution) -> bool {
        self.objectives.len() == other.objectives.len()
            && self.objectives.iter().zip(&other.objectives).all(|(a, b)| a == b)
    }
}
