//! Compute-efficient frontier power laws.
//!
//! Given a compute budget `C` in PF-days, the published frontier fits are all
//! of the form `y = scale * C^exponent`:
//!
//! - optimal non-embedding parameter count `N_opt = N_e * C^p_N`
//! - critical batch size `B_crit = B_e * C^p_B`
//! - lower bound on training steps `S_min = S_e * C^p_S`
//! - optimal dataset size `D_opt = D_e * C^p_D`
//!
//! The functions are total over `f64`: a negative budget with a fractional
//! exponent produces NaN, which callers detect with `is_finite` rather than
//! an error path.

use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;

/// Evaluate a single power law `scale * x^exponent`.
pub fn power_law(scale: f64, x: f64, exponent: f64) -> f64 {
    scale * x.powf(exponent)
}

/// Optimal non-embedding parameter count for a compute budget.
pub fn optimal_params(compute: f64, n_e: f64, p_n: f64) -> f64 {
    power_law(n_e, compute, p_n)
}

/// Critical batch size (tokens) for a compute budget.
///
/// Training batches should stay well below this threshold; beyond it,
/// data-parallel scaling degrades.
pub fn critical_batch_size(compute: f64, b_e: f64, p_b: f64) -> f64 {
    power_law(b_e, compute, p_b)
}

/// Lower bound on the number of training steps for a compute budget.
pub fn min_steps(compute: f64, s_e: f64, p_s: f64) -> f64 {
    power_law(s_e, compute, p_s)
}

/// Optimal dataset size (tokens) for a compute budget.
pub fn optimal_dataset(compute: f64, d_e: f64, p_d: f64) -> f64 {
    power_law(d_e, compute, p_d)
}

/// All four frontier quantities for one compute budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierSolution {
    /// Optimal non-embedding parameter count
    pub n_opt: f64,
    /// Critical batch size in tokens
    pub b_crit: f64,
    /// Minimum number of training steps
    pub s_min: f64,
    /// Optimal dataset size in tokens
    pub d_opt: f64,
}

impl FrontierSolution {
    /// Solve the frontier at the given compute budget (PF-days).
    pub fn solve(compute: f64, coefficients: &Coefficients) -> Self {
        Self {
            n_opt: optimal_params(compute, coefficients.n_e, coefficients.p_n),
            b_crit: critical_batch_size(compute, coefficients.b_e, coefficients.p_b),
            s_min: min_steps(compute, coefficients.s_e, coefficients.p_s),
            d_opt: optimal_dataset(compute, coefficients.d_e, coefficients.p_d),
        }
    }

    /// Whether every quantity came out as a finite real number.
    pub fn is_finite(&self) -> bool {
        self.n_opt.is_finite()
            && self.b_crit.is_finite()
            && self.s_min.is_finite()
            && self.d_opt.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(actual: f64, expected: f64) -> f64 {
        (actual - expected).abs() / expected.abs()
    }

    #[test]
    fn test_power_law_matches_direct_evaluation() {
        for &c in &[0.1, 1.0, 42.0, 1e4, 3.7e8] {
            assert_eq!(optimal_params(c, 1.3e9, 0.73), 1.3e9 * c.powf(0.73));
            assert_eq!(critical_batch_size(c, 2.0e6, 0.24), 2.0e6 * c.powf(0.24));
            assert_eq!(min_steps(c, 5.4e3, 0.03), 5.4e3 * c.powf(0.03));
            assert_eq!(optimal_dataset(c, 2.0e10, 0.27), 2.0e10 * c.powf(0.27));
        }
    }

    #[test]
    fn test_regression_scenario_at_1000_pf_days() {
        // Published defaults at C_min = 1000 PF-days.
        let solution = FrontierSolution::solve(1000.0, &Coefficients::default());

        assert!(relative_error(solution.n_opt, 2.013e11) < 1e-2);
        assert!(relative_error(solution.b_crit, 1.0496e7) < 1e-2);
        assert!(relative_error(solution.s_min, 6.643e3) < 1e-2);
        assert!(relative_error(solution.d_opt, 1.2913e11) < 1e-2);

        // Exact agreement with direct formula evaluation.
        assert_eq!(solution.n_opt, 1.3e9 * 1000f64.powf(0.73));
        assert_eq!(solution.b_crit, 2.0e6 * 1000f64.powf(0.24));
        assert_eq!(solution.s_min, 5.4e3 * 1000f64.powf(0.03));
        assert_eq!(solution.d_opt, 2.0e10 * 1000f64.powf(0.27));
    }

    #[test]
    fn test_zero_compute_yields_zero() {
        let solution = FrontierSolution::solve(0.0, &Coefficients::default());
        assert_eq!(solution.n_opt, 0.0);
        assert!(solution.is_finite());
    }

    #[test]
    fn test_negative_compute_yields_nan_not_panic() {
        let solution = FrontierSolution::solve(-3.0, &Coefficients::default());
        assert!(solution.n_opt.is_nan());
        assert!(!solution.is_finite());
    }

    #[test]
    fn test_frontier_is_monotone_in_compute() {
        let coefficients = Coefficients::default();
        let small = FrontierSolution::solve(10.0, &coefficients);
        let large = FrontierSolution::solve(1000.0, &coefficients);
        assert!(large.n_opt > small.n_opt);
        assert!(large.b_crit > small.b_crit);
        assert!(large.s_min > small.s_min);
        assert!(large.d_opt > small.d_opt);
    }
}
