//! Error types for model derivation and posterior summaries.
//!
//! Every error here is a caller contract violation. None are transient, so
//! nothing in the crate retries; errors propagate to the caller immediately.

use alloc::string::String;

use thiserror::Error;

/// Unified error type for all BEST operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BestError {
    /// The sample is empty or too small for the requested operation.
    #[error("insufficient data: need at least {required} value(s), got {actual}")]
    InsufficientData {
        /// Minimum number of values the operation needs.
        required: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A parameter is outside its valid range, or the input violates a
    /// precondition such as matching group lengths.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The sample has zero spread, so scale-anchored priors collapse.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl BestError {
    /// Shorthand for an [`BestError::InsufficientData`] error.
    pub fn insufficient(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, BestError>;

/// Fail with `InvalidParameter` if any value is NaN or infinite.
pub(crate) fn ensure_finite(data: &[f64], what: &str) -> Result<()> {
    match data.iter().position(|x| !x.is_finite()) {
        None => Ok(()),
        Some(idx) => Err(BestError::InvalidParameter(alloc::format!(
            "{what} contains a non-finite value at index {idx}"
        ))),
    }
}
