//! Equation report and scientific-notation formatting.
//!
//! Presentation layer over [`Evaluation`]: formats each frontier quantity as
//! `result = scale · (C_min)^exponent`, substituting the symbolic name
//! (`N_opt`, `C_min`, ...) whenever the value is unspecified or came out
//! non-finite. The engine itself never formats anything.

use crate::evaluation::Evaluation;

/// Format a value as `m.mm·10^k` (two-digit mantissa, unpadded exponent).
///
/// Non-finite values are passed through as their debug text; callers
/// normally substitute a symbolic placeholder before reaching that case.
pub fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.2e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => format!("{mantissa}·10^{exponent}"),
        None => formatted,
    }
}

/// A finite value in scientific notation, otherwise the symbolic name.
pub fn value_or_symbol(value: Option<f64>, symbol: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format_scientific(v),
        _ => symbol.to_string(),
    }
}

impl Evaluation {
    /// Render the evaluation as a plain-text report: the compute-efficient
    /// frontier with formulas and results, then the regime classification.
    pub fn report(&self) -> String {
        let c = self.inputs.compute();
        let c_text = match c {
            Some(v) => format!("({})", format_scientific(v)),
            None => "C_min".to_string(),
        };

        let frontier = self.frontier.as_ref();
        let coefficients = &self.coefficients;
        let mut lines = vec![
            "Compute Efficient Frontier".to_string(),
            "══════════════════════════".to_string(),
            row(
                "Optimal parameter count (non-embedding)",
                "N_opt",
                "N_opt = N_e · C_min^p_N",
                frontier.map(|f| f.n_opt),
                coefficients.n_e,
                coefficients.p_n,
                &c_text,
            ),
            row(
                "Critical batch size (tokens), ensure B << B_crit",
                "B_crit",
                "B_crit = B_e · C_min^p_B",
                frontier.map(|f| f.b_crit),
                coefficients.b_e,
                coefficients.p_b,
                &c_text,
            ),
            row(
                "Lower bound on number of steps",
                "S_min",
                "S_min = S_e · C_min^p_S",
                frontier.map(|f| f.s_min),
                coefficients.s_e,
                coefficients.p_s,
                &c_text,
            ),
            row(
                "Optimal dataset size (tokens)",
                "D_opt",
                "D_opt = D_e · C_min^p_D",
                frontier.map(|f| f.d_opt),
                coefficients.d_e,
                coefficients.p_d,
                &c_text,
            ),
        ];

        lines.push(String::new());
        lines.push(format!("Training regime: {}", self.regime.description()));

        if let Some((n, ratio)) = self.overhead.highlight {
            lines.push(format!(
                "Compute overhead at N = {}: {:.2}x the efficient budget",
                format_scientific(n),
                ratio
            ));
        }

        lines.join("\n")
    }
}

fn row(
    label: &str,
    symbol: &str,
    formula: &str,
    value: Option<f64>,
    scale: f64,
    exponent: f64,
    c_text: &str,
) -> String {
    format!(
        "{label}\n  {formula}\n  {} = {} · {}^{:.2}",
        value_or_symbol(value, symbol),
        format_scientific(scale),
        c_text,
        exponent,
    )
}
