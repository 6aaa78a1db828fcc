//! Scaling-law coefficients with published defaults.
//!
//! One value group holds everything the engine needs: the four
//! compute-efficient-frontier power laws (exponent + scale pairs) and the
//! general loss scaling laws with their tokenization-dependent normalization
//! constants. Defaults follow the published GPT-family fits; every field can
//! be overridden, e.g. to explore alternative tokenizations.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Complete coefficient set for one evaluation.
///
/// Exponents are dimensionless; scale constants carry the units of the
/// quantity they produce (parameters, tokens, steps) at a compute budget of
/// 1 PF-day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coefficients {
    /// Frontier exponent for optimal parameter count
    pub p_n: f64,
    /// Frontier exponent for critical batch size
    pub p_b: f64,
    /// Frontier exponent for minimum training steps
    pub p_s: f64,
    /// Frontier exponent for optimal dataset size
    pub p_d: f64,
    /// Parameter scale at the reference compute point
    pub n_e: f64,
    /// Batch-size scale at the reference compute point
    pub b_e: f64,
    /// Step-count scale at the reference compute point
    pub s_e: f64,
    /// Dataset scale at the reference compute point
    pub d_e: f64,
    /// Loss-vs-parameters exponent
    pub a_n: f64,
    /// Loss-vs-dataset exponent
    pub a_d: f64,
    /// Loss-vs-compute exponent
    pub a_c_min: f64,
    /// Steps-vs-excess-loss exponent
    pub a_s: f64,
    /// Parameter normalization constant (tokenization-dependent)
    pub n_c: f64,
    /// Dataset normalization constant (tokenization-dependent)
    pub d_c: f64,
    /// Compute normalization constant (tokenization-dependent)
    pub c_min_c: f64,
    /// Step normalization constant (tokenization-dependent)
    pub s_c: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            p_n: 0.73,
            p_b: 0.24,
            p_s: 0.03,
            p_d: 0.27,
            n_e: 1.3e9,
            b_e: 2.0e6,
            s_e: 5.4e3,
            d_e: 2.0e10,
            a_n: 0.076,
            a_d: 0.095,
            a_c_min: 0.05,
            a_s: 0.76,
            n_c: 8.8e13,
            d_c: 5.4e13,
            c_min_c: 3.1e8,
            s_c: 2.1e3,
        }
    }
}

impl Coefficients {
    /// Check that every coefficient is a finite real number.
    ///
    /// The formulas themselves place no further constraints; a NaN or
    /// infinite coefficient would silently poison every downstream value,
    /// so it is rejected up front.
    pub fn validate(&self) -> Result<(), CoefficientError> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                return Err(CoefficientError::NotFinite { name, value });
            }
        }
        Ok(())
    }

    /// Load and validate coefficients from a JSON file.
    ///
    /// Missing fields fall back to the published defaults, so a file only
    /// needs to list the coefficients it overrides.
    pub fn from_json_file(path: &Path) -> Result<Self, CoefficientError> {
        let content = fs::read_to_string(path).map_err(|source| CoefficientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let coefficients: Self =
            serde_json::from_str(&content).map_err(|source| CoefficientError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Write the coefficient set to a JSON file (pretty-printed).
    pub fn to_json_file(&self, path: &Path) -> Result<(), CoefficientError> {
        let content = serde_json::to_string_pretty(self).map_err(|source| {
            CoefficientError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, content).map_err(|source| CoefficientError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn fields(&self) -> [(&'static str, f64); 16] {
        [
            ("p_n", self.p_n),
            ("p_b", self.p_b),
            ("p_s", self.p_s),
            ("p_d", self.p_d),
            ("n_e", self.n_e),
            ("b_e", self.b_e),
            ("s_e", self.s_e),
            ("d_e", self.d_e),
            ("a_n", self.a_n),
            ("a_d", self.a_d),
            ("a_c_min", self.a_c_min),
            ("a_s", self.a_s),
            ("n_c", self.n_c),
            ("d_c", self.d_c),
            ("c_min_c", self.c_min_c),
            ("s_c", self.s_c),
        ]
    }
}

/// Errors from coefficient validation and file IO.
#[derive(Debug, thiserror::Error)]
pub enum CoefficientError {
    /// A coefficient is NaN or infinite.
    #[error("coefficient {name} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending field
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Reading or writing the coefficient file failed.
    #[error("failed to access coefficient file {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The coefficient file is not valid JSON.
    #[error("failed to parse coefficient file {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}
