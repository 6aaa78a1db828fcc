//! Compute overhead of training away from the efficient frontier.
//!
//! For a fixed loss target, training a model of size `n` instead of the
//! compute-efficient size `n_eff` costs extra compute by the factor
//!
//! ```text
//! C/C_min = (n / n_eff) * (1 + (a_S/a_N) * (1 - (n_eff/n)^a_N))^(-1/a_S)
//! ```
//!
//! For `n` well below `n_eff` the inner base goes negative and the fractional
//! power is undefined over the reals; those points are dropped from the curve
//! rather than substituted, the equation being ill-defined there.

use serde::{Deserialize, Serialize};

/// Number of samples along the curve before filtering.
pub const CURVE_POINTS: usize = 50;

/// Decades spanned on each side of `n_eff`.
pub const SPAN_DECADES: f64 = 2.0;

/// Compute-overhead ratio `C/C_min` for model size `n` at efficient size `n_eff`.
///
/// Returns NaN where the expression is undefined; callers filter on
/// `is_finite`. At `n == n_eff` the ratio is exactly 1.
pub fn overhead_ratio(n: f64, n_eff: f64, a_n: f64, a_s: f64) -> f64 {
    let excess = 1.0 + (a_s / a_n) * (1.0 - (n_eff / n).powf(a_n));
    (n / n_eff) * excess.powf(-1.0 / a_s)
}

/// Overhead-ratio curve around an efficient model size, for plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverheadCurve {
    /// Compute-efficient model size the curve is centered on
    pub n_eff: f64,
    /// Loss-vs-parameters exponent used
    pub a_n: f64,
    /// Steps-vs-excess-loss exponent used
    pub a_s: f64,
    /// `(n, ratio)` pairs, increasing in `n`, ill-defined points removed
    pub points: Vec<(f64, f64)>,
    /// The caller's own `(n, ratio)`, when inside the curve's range
    pub highlight: Option<(f64, f64)>,
}

impl OverheadCurve {
    /// Generate the curve: [`CURVE_POINTS`] log-spaced sizes spanning
    /// [`SPAN_DECADES`] decades below and above `n_eff`, with non-finite
    /// ratios filtered out.
    pub fn generate(n_eff: f64, a_n: f64, a_s: f64) -> Self {
        let points = (0..CURVE_POINTS)
            .filter_map(|i| {
                let t = i as f64 / (CURVE_POINTS - 1) as f64;
                let n = n_eff * 10f64.powf(SPAN_DECADES * (2.0 * t - 1.0));
                let ratio = overhead_ratio(n, n_eff, a_n, a_s);
                ratio.is_finite().then_some((n, ratio))
            })
            .collect();

        Self {
            n_eff,
            a_n,
            a_s,
            points,
            highlight: None,
        }
    }

    /// Attach a highlight point at the caller's own model size.
    ///
    /// The point is kept only if `n` is specified (`n > 0`), lies strictly
    /// inside the curve's generated range, and its ratio is finite.
    pub fn with_highlight(mut self, n: f64) -> Self {
        self.highlight = None;
        if let (Some(&(n_min, _)), Some(&(n_max, _))) = (self.points.first(), self.points.last()) {
            if n > n_min && n < n_max {
                let ratio = overhead_ratio(n, self.n_eff, self.a_n, self.a_s);
                if ratio.is_finite() {
                    self.highlight = Some((n, ratio));
                }
            }
        }
        self
    }

    /// `(n, ratio)` bounds of the surviving points, `None` when empty.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        let ratio_min = self
            .points
            .iter()
            .map(|&(_, r)| r)
            .fold(f64::INFINITY, f64::min);
        let ratio_max = self
            .points
            .iter()
            .map(|&(_, r)| r)
            .fold(f64::NEG_INFINITY, f64::max);
        Some(((first.0, last.0), (ratio_min, ratio_max)))
    }
}
