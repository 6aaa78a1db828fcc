//! One-shot evaluation combining frontier, regime, and overhead curve.
//!
//! `evaluate` is the engine's single entry point: pure, stateless, and safe
//! to call concurrently with different inputs. Every call builds its outputs
//! fresh; a UI shell re-invokes it whenever an input changes instead of
//! relying on implicit recomputation.

use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;
use crate::frontier::FrontierSolution;
use crate::inputs::TrainingInputs;
use crate::overhead::OverheadCurve;
use crate::regime::Regime;

/// Complete result of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// The inputs this evaluation was run with
    pub inputs: TrainingInputs,
    /// The coefficient set used
    pub coefficients: Coefficients,
    /// Frontier quantities, present when the compute budget was specified
    pub frontier: Option<FrontierSolution>,
    /// Training regime classification
    pub regime: Regime,
    /// Diagnostic overhead curve around the effective model size
    pub overhead: OverheadCurve,
}

impl Evaluation {
    /// The model size the overhead curve is centered on: `n_opt` when the
    /// compute budget gave a usable value, otherwise the reference scale
    /// `n_e`.
    pub fn n_eff(&self) -> f64 {
        self.overhead.n_eff
    }
}

/// Evaluate all scaling-law outputs for one set of inputs and coefficients.
pub fn evaluate(inputs: TrainingInputs, coefficients: &Coefficients) -> Evaluation {
    let frontier = inputs
        .compute()
        .map(|c| FrontierSolution::solve(c, coefficients));

    let regime = Regime::classify(inputs.params, inputs.dataset, coefficients);

    let n_eff = frontier
        .map(|f| f.n_opt)
        .filter(|n| n.is_finite() && *n > 0.0)
        .unwrap_or(coefficients.n_e);

    let mut overhead = OverheadCurve::generate(n_eff, coefficients.a_n, coefficients.a_s);
    if let Some(n) = inputs.params() {
        overhead = overhead.with_highlight(n);
    }

    tracing::debug!(
        compute = inputs.compute,
        n_eff,
        regime = %regime,
        curve_points = overhead.points.len(),
        "scaling-law evaluation complete"
    );

    Evaluation {
        inputs,
        coefficients: *coefficients,
        frontier,
        regime,
        overhead,
    }
}
