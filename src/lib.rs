//! Scaling-law calculator for compute-efficient LLM training.
//!
//! This crate evaluates the published empirical scaling laws for large-model
//! training as closed-form power laws over a compute budget:
//!
//! - Optimal non-embedding parameter count, critical batch size, minimum
//!   training steps, and optimal dataset size on the compute-efficient
//!   frontier
//! - Data-limited vs. capacity-limited regime classification from a concrete
//!   parameter count and dataset size
//! - A compute-overhead-vs-model-size diagnostic curve, with ill-defined
//!   points filtered out
//!
//! The engine is a set of pure, stateless functions behind a single
//! [`evaluate`] entry point; formatting and charting live in separate
//! presentation modules.
//!
//! # Binaries
//!
//! - `frontier` - Evaluate the frontier for a compute budget and print the
//!   equation report and overhead chart
//!
//! # Example
//!
//! ```rust
//! use scaling_frontier::{evaluate, Coefficients, TrainingInputs};
//!
//! let inputs = TrainingInputs::new().with_compute(1000.0);
//! let evaluation = evaluate(inputs, &Coefficients::default());
//!
//! let frontier = evaluation.frontier.unwrap();
//! assert!(frontier.n_opt > 1e11 && frontier.n_opt < 3e11);
//! println!("{}", evaluation.report());
//! ```

pub mod chart;
pub mod coefficients;
pub mod evaluation;
pub mod frontier;
pub mod inputs;
pub mod overhead;
pub mod regime;
pub mod report;

pub use chart::OverheadChart;
pub use coefficients::{CoefficientError, Coefficients};
pub use evaluation::{evaluate, Evaluation};
pub use frontier::{
    critical_batch_size, min_steps, optimal_dataset, optimal_params, power_law, FrontierSolution,
};
pub use inputs::{
    flops_to_pf_days, pf_days_to_flops, TrainingInputs, PFLOPS_DAY, UNSPECIFIED,
};
pub use overhead::{overhead_ratio, OverheadCurve, CURVE_POINTS, SPAN_DECADES};
pub use regime::Regime;
pub use report::{format_scientific, value_or_symbol};
