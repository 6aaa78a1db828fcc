//! User-supplied evaluation inputs and the "unspecified" sentinel.
//!
//! Compute budget, parameter count, and dataset size may each be left
//! unspecified with the sentinel value `-1`. The raw fields keep the sentinel
//! so inputs round-trip through serialization unchanged; the accessor methods
//! resolve it to `Option<f64>`.

use serde::{Deserialize, Serialize};

/// Sentinel marking an input as "not provided".
pub const UNSPECIFIED: f64 = -1.0;

/// FLOPs in one PetaFLOP-day (1e15 FLOP/s for 86 400 s).
pub const PFLOPS_DAY: f64 = 8.64e19;

/// Convert a compute budget from PF-days to raw FLOPs.
pub fn pf_days_to_flops(pf_days: f64) -> f64 {
    pf_days * PFLOPS_DAY
}

/// Convert a raw FLOP count to PF-days.
pub fn flops_to_pf_days(flops: f64) -> f64 {
    flops / PFLOPS_DAY
}

/// Inputs for one scaling-law evaluation.
///
/// - `compute`: training compute budget in PF-days
/// - `params`: non-embedding parameter count
/// - `dataset`: dataset size in tokens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingInputs {
    /// Compute budget in PF-days, or [`UNSPECIFIED`]
    pub compute: f64,
    /// Non-embedding parameter count, or [`UNSPECIFIED`]
    pub params: f64,
    /// Dataset size in tokens, or [`UNSPECIFIED`]
    pub dataset: f64,
}

impl Default for TrainingInputs {
    fn default() -> Self {
        Self {
            compute: UNSPECIFIED,
            params: UNSPECIFIED,
            dataset: UNSPECIFIED,
        }
    }
}

impl TrainingInputs {
    /// All inputs unspecified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compute budget (PF-days).
    pub fn with_compute(mut self, pf_days: f64) -> Self {
        self.compute = pf_days;
        self
    }

    /// Set the non-embedding parameter count.
    pub fn with_params(mut self, params: f64) -> Self {
        self.params = params;
        self
    }

    /// Set the dataset size (tokens).
    pub fn with_dataset(mut self, tokens: f64) -> Self {
        self.dataset = tokens;
        self
    }

    /// Compute budget if specified (strictly positive and finite).
    pub fn compute(&self) -> Option<f64> {
        specified(self.compute)
    }

    /// Parameter count if specified.
    pub fn params(&self) -> Option<f64> {
        specified(self.params)
    }

    /// Dataset size if specified.
    pub fn dataset(&self) -> Option<f64> {
        specified(self.dataset)
    }
}

fn specified(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}
