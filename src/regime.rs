//! Training regime classification.
//!
//! Given a concrete parameter count and dataset size, the loss scaling laws
//! say which of the two is the binding constraint: compare the dataset-side
//! quantity `D_c * D^a_D` against the capacity-side quantity `N_c * N^a_N`
//! and the smaller side limits achievable loss.

use serde::{Deserialize, Serialize};

use crate::coefficients::Coefficients;

/// Which constraint binds achievable loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Dataset size is the binding constraint; more tokens would help most
    DataLimited,
    /// Model capacity is the binding constraint; more parameters would help most
    CapacityLimited,
    /// Parameter count or dataset size was not specified
    Undetermined,
}

impl Regime {
    /// Classify the regime for a parameter count and dataset size.
    ///
    /// Both inputs must be strictly positive and finite; otherwise the
    /// result is [`Regime::Undetermined`]. An exact tie between the two
    /// sides falls into the `else` branch and classifies as
    /// [`Regime::CapacityLimited`].
    pub fn classify(params: f64, dataset: f64, coefficients: &Coefficients) -> Self {
        if !(params.is_finite() && params > 0.0) || !(dataset.is_finite() && dataset > 0.0) {
            return Self::Undetermined;
        }

        let data_side = coefficients.d_c * dataset.powf(coefficients.a_d);
        let capacity_side = coefficients.n_c * params.powf(coefficients.a_n);

        if data_side < capacity_side {
            Self::DataLimited
        } else {
            Self::CapacityLimited
        }
    }

    /// Human-readable description of the regime.
    pub fn description(&self) -> &str {
        match self {
            Self::DataLimited => "data-limited (dataset size is the binding constraint)",
            Self::CapacityLimited => "capacity-limited (model capacity is the binding constraint)",
            Self::Undetermined => "undetermined (specify both N and D to classify)",
        }
    }

    /// Whether both inputs were specified and a classification was made.
    pub fn is_determined(&self) -> bool {
        !matches!(self, Self::Undetermined)
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataLimited => write!(f, "data-limited"),
            Self::CapacityLimited => write!(f, "capacity-limited"),
            Self::Undetermined => write!(f, "undetermined"),
        }
    }
}
