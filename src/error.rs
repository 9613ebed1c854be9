//! Error types for signal processing operations.
//!
//! Every core operation validates its preconditions before touching the
//! output buffer, so an `Err` from this module always means the caller's
//! output is exactly as it was before the call.

use thiserror::Error;

/// Main error type for signal processing operations.
#[derive(Error, Debug)]
pub enum SignalError {
    /// Input validation errors.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Sequences handed in together have different lengths.
    #[error("Length mismatch: {expected} input samples vs {actual} output samples")]
    LengthMismatch { expected: usize, actual: usize },

    /// Sequence is too short for the requested operation.
    #[error("Sequence too short: need at least {min} samples, got {actual}")]
    SequenceTooShort { min: usize, actual: usize },

    /// A numeric parameter is out of its valid range.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The operation is declared but has no defined algorithm.
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for signal processing operations.
pub type Result<T> = std::result::Result<T, SignalError>;

impl SignalError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a sequence too short error.
    #[must_use]
    pub const fn sequence_too_short(min: usize, actual: usize) -> Self {
        Self::SequenceTooShort { min, actual }
    }

    /// Create an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Check that an input/output pair has matching lengths.
pub(crate) fn ensure_same_len(input: usize, output: usize) -> Result<()> {
    if input == output {
        Ok(())
    } else {
        Err(SignalError::length_mismatch(input, output))
    }
}

/// Check that a rate or frequency is strictly positive and finite.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SignalError::invalid_parameter(
            name,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
