//! Error taxonomy for isotherm computations
//!
//! Every computation in this crate is a pure, per-call evaluation. When an
//! input falls outside what a formula can represent, the call fails with one
//! of three errors and the caller decides what to show instead:
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`IsothermError::Domain`] | an input is outside a formula's valid mathematical domain |
//! | [`IsothermError::KeyNotFound`] | a name is not present in a lookup table |
//! | [`IsothermError::Overflow`] | an exponential or power exceeds the `f64` range |
//!
//! Failures are never converted into `NaN` or `±inf` values.

use thiserror::Error;

/// Errors raised by the isotherm formula library and everything built on it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IsothermError {
    /// Input outside the valid domain of a formula.
    #[error("{quantity} = {value} is outside the valid domain: {reason}")]
    Domain {
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Name missing from a lookup table (material, adsorbent, model, parameter).
    #[error("'{key}' not found in {table}")]
    KeyNotFound { table: &'static str, key: String },

    /// Evaluation exceeded the representable `f64` range.
    #[error("{operation} overflowed the representable range")]
    Overflow { operation: &'static str },
}

impl IsothermError {
    /// Shorthand for a [`IsothermError::Domain`] error.
    pub fn domain(quantity: &'static str, value: f64, reason: &'static str) -> Self {
        Self::Domain {
            quantity,
            value,
            reason,
        }
    }

    /// Shorthand for a [`IsothermError::KeyNotFound`] error.
    pub fn key_not_found(table: &'static str, key: impl Into<String>) -> Self {
        Self::KeyNotFound {
            table,
            key: key.into(),
        }
    }

    /// Shorthand for an [`IsothermError::Overflow`] error.
    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = IsothermError> = std::result::Result<T, E>;

// =================================================================================================
// Validation helpers
// =================================================================================================

/// Require `value > 0` (and finite).
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(IsothermError::domain(quantity, value, "must be finite and > 0"))
    }
}

/// Require `value >= 0` (and finite).
pub(crate) fn ensure_non_negative(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(IsothermError::domain(quantity, value, "must be finite and >= 0"))
    }
}

/// Require `0 <= value <= 100`.
pub(crate) fn ensure_percentage(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(IsothermError::domain(quantity, value, "must lie within [0, 100] %"))
    }
}

/// Reject `inf` / `NaN` results produced by an otherwise valid evaluation.
pub(crate) fn ensure_finite(operation: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IsothermError::overflow(operation))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
