//! Cobb-Douglas Habitability (CDH) objective functions
//!
//! The CDH score of an exoplanet combines an interior score built from
//! radius and density with a surface score built from escape velocity and
//! surface temperature, each a Cobb-Douglas product with elasticity
//! exponents as decision variables. The optimizer searches the elasticity
//! space; both scores are negated (minimized) and constraint terms are
//! penalty-encoded into the objectives.
//!
//! Decision vector layout: `[alpha, beta, gamma, delta, c]` with an extra
//! trailing slack variable `e` in the modified-CRS formulation. `gamma` is
//! not free: each evaluation overwrites it with the coupling
//! `gamma = c * alpha * escape_velocity / radius`.

use anyhow::Result;

use super::{penalty, Problem};
use crate::solution::Solution;

/// Interior habitability score, `radius^alpha * density^beta`
pub fn interior_score(radius: f64, density: f64, alpha: f64, beta: f64) -> f64 {
    radius.powf(alpha) * density.powf(beta)
}

/// Surface habitability score, `escape_velocity^gamma * surface_temperature^delta`
pub fn surface_score(
    escape_velocity: f64,
    surface_temperature: f64,
    gamma: f64,
    delta: f64,
) -> f64 {
    escape_velocity.powf(gamma) * surface_temperature.powf(delta)
}

/// Constraint formulation of the CDH objectives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdhForm {
    /// Constant returns to scale: elasticities constrained to sum to one
    /// via an equality penalty, variables bounded to `[0, 1]`
    Crs,
    /// Decreasing returns to scale: elasticity sum bounded above one via
    /// an inequality penalty, variables bounded to `[-2, 2]`
    Drs,
    /// CRS with an explicit slack variable absorbing the equality residual
    ModifiedCrs,
    /// DRS with the slack-free quadratic inequality penalty
    ModifiedDrs,
}

/// A CDH optimization problem for one planet
///
/// Planetary inputs are in Earth units (surface temperature normalized by
/// 288 K). Two objectives, both minimized: negated interior score and
/// negated surface score, each plus the form's penalty terms.
#[derive(Debug, Clone)]
pub struct CdhProblem {
    radius: f64,
    density: f64,
    escape_velocity: f64,
    surface_temperature: f64,
    form: CdhForm,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl CdhProblem {
    /// Create a CDH problem for the given planet and constraint form
    pub fn new(
        form: CdhForm,
        radius: f64,
        density: f64,
        escape_velocity: f64,
        surface_temperature: f64,
    ) -> Self {
        let (mut lower, mut upper) = match form {
            CdhForm::Crs => (vec![0.0; 5], vec![1.0; 5]),
            CdhForm::Drs | CdhForm::ModifiedDrs => (vec![-2.0; 5], vec![2.0; 5]),
            CdhForm::ModifiedCrs => (vec![0.0; 6], vec![1.0; 6]),
        };

        // The constant factor c ranges over [0, 5] in every form; the
        // modified-CRS slack variable is confined to [0, 1e-9].
        match form {
            CdhForm::ModifiedCrs => {
                lower[4] = 0.0;
                upper[4] = 5.0;
                lower[5] = 0.0;
                upper[5] = 1e-9;
            }
            _ => {
                lower[4] = 0.0;
                upper[4] = 5.0;
            }
        }

        Self { radius, density, escape_velocity, surface_temperature, form, lower, upper }
    }

    /// Shorthand for [`CdhForm::Crs`]
    pub fn crs(radius: f64, density: f64, escape_velocity: f64, surface_temperature: f64) -> Self {
        Self::new(CdhForm::Crs, radius, density, escape_velocity, surface_temperature)
    }

    /// Shorthand for [`CdhForm::Drs`]
    pub fn drs(radius: f64, density: f64, escape_velocity: f64, surface_temperature: f64) -> Self {
        Self::new(CdhForm::Drs, radius, density, escape_velocity, surface_temperature)
    }

    /// Penalty terms shared by both objectives: the returns-to-scale
    /// constraint on the exponent pair plus `[0, 1]` box penalties.
    fn constraint_terms(&self, x0: f64, x1: f64, slack: f64) -> f64 {
        let bounds = |error: f64| {
            penalty::l2_inequality_penalty(-x0, error)
                + penalty::l2_inequality_penalty(x0 - 1.0, error)
                + penalty::l2_inequality_penalty(-x1, error)
                + penalty::l2_inequality_penalty(x1 - 1.0, error)
        };
        match self.form {
            CdhForm::Crs => {
                penalty::l2_equality_penalty(x0 + x1 - 1.0, 1e-9) + bounds(1e-9)
            }
            CdhForm::Drs => {
                penalty::l2_inequality_penalty(x0 + x1 - 1.0, 1e-5) + bounds(1e-5)
            }
            CdhForm::ModifiedCrs => {
                penalty::l2_equality_penalty(x0 + x1 + slack - 1.0, 1e-9) + bounds(1e-9)
            }
            CdhForm::ModifiedDrs => {
                penalty::modified_inequality_penalty(x0 + x1 - 1.0) + bounds(1e-19)
            }
        }
    }
}

impl Problem for CdhProblem {
    fn number_of_variables(&self) -> usize {
        self.lower.len()
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn lower_bound(&self, j: usize) -> f64 {
        self.lower[j]
    }

    fn upper_bound(&self, j: usize) -> f64 {
        self.upper[j]
    }

    fn name(&self) -> &str {
        "cdh-habitability"
    }

    fn evaluate(&self, solution: &mut Solution) -> Result<()> {
        let alpha = solution.variables[0];
        let beta = solution.variables[1];
        let c_idx = match self.form {
            CdhForm::ModifiedCrs => 4,
            _ => self.lower.len() - 1,
        };
        let constant_factor = solution.variables[c_idx];

        // Coupling: gamma is derived from c and written back into the
        // decision vector so downstream consumers see the effective value.
        let gamma = constant_factor * alpha * self.escape_velocity / self.radius;
        solution.variables[2] = gamma;
        let delta = solution.variables[3];

        let slack = if self.form == CdhForm::ModifiedCrs {
            solution.variables[5]
        } else {
            0.0
        };

        solution.objectives[0] = -interior_score(self.radius, self.density, alpha, beta)
            + self.constraint_terms(alpha, beta, slack);
        solution.objectives[1] =
            -surface_score(self.escape_velocity, self.surface_temperature, gamma, delta)
                + self.constraint_terms(gamma, delta, slack);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_at_earth_values() {
        // Earth in Earth units: every score factor is 1 regardless of exponents
        assert_eq!(interior_score(1.0, 1.0, 0.3, 0.7), 1.0);
        assert_eq!(surface_score(1.0, 1.0, 0.5, 0.5), 1.0);
    }

    #[test]
    fn test_dimensions_per_form() {
        let crs = CdhProblem::crs(1.0, 1.0, 1.0, 1.0);
        assert_eq!(crs.number_of_variables(), 5);
        assert_eq!(crs.number_of_objectives(), 2);

        let modified = CdhProblem::new(CdhForm::ModifiedCrs, 1.0, 1.0, 1.0, 1.0);
        assert_eq!(modified.number_of_variables(), 6);
        assert_eq!(modified.upper_bound(5), 1e-9);
    }

    #[test]
    fn test_bounds_per_form() {
        let crs = CdhProblem::crs(1.0, 1.0, 1.0, 1.0);
        assert_eq!(crs.lower_bound(0), 0.0);
        assert_eq!(crs.upper_bound(0), 1.0);
        assert_eq!(crs.upper_bound(4), 5.0);

        let drs = CdhProblem::drs(1.0, 1.0, 1.0, 1.0);
        assert_eq!(drs.lower_bound(0), -2.0);
        assert_eq!(drs.upper_bound(0), 2.0);
        assert_eq!(drs.upper_bound(4), 5.0);
    }

    #[test]
    fn test_feasible_point_has_no_penalty() {
        // alpha + beta = 1 with both in [0, 1]: the CRS equality holds,
        // so f1 is exactly the negated interior score.
        let problem = CdhProblem::crs(1.83, 1.19, 1.99, 0.95);
        let mut s = Solution::with_variables(vec![0.4, 0.6, 0.0, 0.4, 0.0], 2);
        problem.evaluate(&mut s).unwrap();
        let expected = -interior_score(1.83, 1.19, 0.4, 0.6);
        assert!((s.objectives[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_violating_point_is_heavily_penalized() {
        let problem = CdhProblem::crs(1.0, 1.0, 1.0, 1.0);
        let mut s = Solution::with_variables(vec![0.9, 0.9, 0.0, 0.5, 0.0], 2);
        problem.evaluate(&mut s).unwrap();
        assert!(s.objectives[0] > 1e90);
    }

    #[test]
    fn test_gamma_coupling_writes_back() {
        let problem = CdhProblem::crs(2.0, 1.0, 4.0, 1.0);
        let mut s = Solution::with_variables(vec![0.5, 0.5, 0.0, 0.5, 1.0], 2);
        problem.evaluate(&mut s).unwrap();
        // gamma = c * alpha * v_e / r = 1.0 * 0.5 * 4.0 / 2.0
        assert!((s.variables[2] - 1.0).abs() < 1e-12);
    }
}
