//! Penalty terms for constraint handling
//!
//! Constraints are folded into objective values as additive penalties.
//! The factors are deliberately enormous relative to the score range so
//! that any violating solution is dominated by every feasible one.

/// Penalty factor for the L1 family.
const K_L1: f64 = 1e13;

/// Penalty factor for the L2 family.
const K_L2: f64 = 1e101;

/// L1 penalty for an equality constraint `diff == 0`
///
/// No penalty while `|diff|` stays within `tolerance`.
pub fn l1_equality_penalty(diff: f64, tolerance: f64) -> f64 {
    let abs_diff = diff.abs();
    if abs_diff <= tolerance {
        0.0
    } else {
        K_L1 * abs_diff
    }
}

/// L1 penalty for an inequality constraint `x <= 0`
pub fn l1_inequality_penalty(x: f64, error: f64) -> f64 {
    if x + error <= 0.0 {
        0.0
    } else {
        K_L1 * x.abs()
    }
}

/// L2-family penalty for an equality constraint `diff == 0`
///
/// Linear in `|diff|` despite the family name; the factor is what makes
/// it effectively lexicographic.
pub fn l2_equality_penalty(diff: f64, tolerance: f64) -> f64 {
    let abs_diff = diff.abs();
    if abs_diff <= tolerance {
        0.0
    } else {
        3.0 * K_L2 * abs_diff
    }
}

/// L2 penalty for an inequality constraint `x <= 0`, quadratic in `x`
pub fn l2_inequality_penalty(x: f64, error: f64) -> f64 {
    if x + error <= 0.0 {
        0.0
    } else {
        K_L2 * x * x
    }
}

/// Quadratic inequality penalty with a built-in slack of `1e-11`
pub fn modified_inequality_penalty(x: f64) -> f64 {
    let slack = 1e-11;
    if x - slack < 0.0 {
        0.0
    } else {
        K_L2 * x * x
    }
}
