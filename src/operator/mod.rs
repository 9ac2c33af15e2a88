//! Mutation operators
//!
//! In-place perturbation of a single solution's decision vector. The
//! engine applies an operator to a slice of the swarm each generation to
//! keep exploration alive once the quantum update starts clustering the
//! swarm near the leaders.

use rand::{Rng, RngCore};

use crate::problem::Problem;
use crate::solution::Solution;

/// An operator that perturbs one solution in place
pub trait MutationOperator: Send + Sync {
    /// Mutate the solution's decision vector, keeping it within the
    /// problem's bounds
    fn execute(&self, solution: &mut Solution, problem: &dyn Problem, rng: &mut dyn RngCore);
}

/// Polynomial mutation (Deb & Goyal, 1996)
///
/// Each variable is mutated independently with probability `probability`;
/// the perturbation magnitude follows a polynomial distribution shaped by
/// `distribution_index` (larger index, smaller steps).
#[derive(Debug, Clone)]
pub struct PolynomialMutation {
    probability: f64,
    distribution_index: f64,
}

impl PolynomialMutation {
    /// Create a polynomial mutation operator
    pub fn new(probability: f64, distribution_index: f64) -> Self {
        Self { probability, distribution_index }
    }
}

impl MutationOperator for PolynomialMutation {
    fn execute(&self, solution: &mut Solution, problem: &dyn Problem, rng: &mut dyn RngCore) {
        let eta = self.distribution_index;
        for j in 0..solution.number_of_variables() {
            if rng.gen::<f64>() > self.probability {
                continue;
            }

            let yl = problem.lower_bound(j);
            let yu = problem.upper_bound(j);
            let range = yu - yl;
            if range <= 0.0 {
                continue;
            }

            let y = solution.variables[j];
            let delta1 = (y - yl) / range;
            let delta2 = (yu - y) / range;
            let rnd = rng.gen::<f64>();
            let mut_pow = 1.0 / (eta + 1.0);

            let deltaq = if rnd <= 0.5 {
                let xy = 1.0 - delta1;
                let val = 2.0 * rnd + (1.0 - 2.0 * rnd) * xy.powf(eta + 1.0);
                val.powf(mut_pow) - 1.0
            } else {
                let xy = 1.0 - delta2;
                let val = 2.0 * (1.0 - rnd) + 2.0 * (rnd - 0.5) * xy.powf(eta + 1.0);
                1.0 - val.powf(mut_pow)
            };

            solution.variables[j] = (y + deltaq * range).clamp(yl, yu);
        }
    }
}

/// Uniform mutation: adds a symmetric uniform offset scaled by
/// `perturbation` to each selected variable
#[derive(Debug, Clone)]
pub struct UniformMutation {
    probability: f64,
    perturbation: f64,
}

impl UniformMutation {
    /// Create a uniform mutation operator
    pub fn new(probability: f64, perturbation: f64) -> Self {
        Self { probability, perturbation }
    }
}

impl MutationOperator for UniformMutation {
    fn execute(&self, solution: &mut Solution, problem: &dyn Problem, rng: &mut dyn RngCore) {
        for j in 0..solution.number_of_variables() {
            if rng.gen::<f64>() > self.probability {
                continue;
            }
            let offset = (rng.gen::<f64>() - 0.5) * self.perturbation;
            solution.variables[j] = (solution.variables[j] + offset)
                .clamp(problem.lower_bound(j), problem.upper_bound(j));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct UnitCube(usize);

    impl Problem for UnitCube {
        fn number_of_variables(&self) -> usize {
            self.0
        }

        fn number_of_objectives(&self) -> usize {
            2
        }

        fn lower_bound(&self, _j: usize) -> f64 {
            0.0
        }

        fn upper_bound(&self, _j: usize) -> f64 {
            1.0
        }

        fn evaluate(&self, _solution: &mut Solution) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_polynomial_stays_within_bounds() {
        let problem = UnitCube(4);
        let operator = PolynomialMutation::new(1.0, 20.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut s = Solution::with_variables(vec![0.01, 0.5, 0.99, 0.0], 2);
        for _ in 0..200 {
            operator.execute(&mut s, &problem, &mut rng);
            assert!(s.variables.iter().all(|&v| (0.0..=1.0).contains(&v)), "{:?}", s.variables);
        }
    }

    #[test]
    fn test_zero_probability_is_identity() {
        let problem = UnitCube(3);
        let operator = PolynomialMutation::new(0.0, 20.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = Solution::with_variables(vec![0.2, 0.4, 0.6], 2);
        let before = s.variables.clone();
        operator.execute(&mut s, &problem, &mut rng);
        assert_eq!(s.variables, before);
    }

    #[test]
    fn test_polynomial_actually_perturbs() {
        let problem = UnitCube(3);
        let operator = PolynomialMutation::new(1.0, 20.0);
        let mut rng = StdRng::seed_from_u64(11);
        let mut s = Solution::with_variables(vec![0.5, 0.5, 0.5], 2);
        let before = s.variables.clone();
        operator.execute(&mut s, &problem, &mut rng);
        assert_ne!(s.variables, before);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let problem = UnitCube(3);
        let operator = PolynomialMutation::new(0.5, 20.0);
        let mut a = Solution::with_variables(vec![0.3, 0.6, 0.9], 2);
        let mut b = a.clone();
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        operator.execute(&mut a, &problem, &mut rng_a);
        operator.execute(&mut b, &problem, &mut rng_b);
        assert_eq!(a.variables, b.variables);
    }

    #[test]
    fn test_uniform_stays_within_bounds() {
        let problem = UnitCube(2);
        let operator = UniformMutation::new(1.0, 10.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = Solution::with_variables(vec![0.5, 0.5], 2);
        for _ in 0..100 {
            operator.execute(&mut s, &problem, &mut rng);
            assert!(s.variables.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
    }
}
