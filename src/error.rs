//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// Rejections produced by the input validation gate
///
/// These are raised before an entry is constructed, so a validation failure
/// never mutates the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// The amount text could not be parsed as a number
    #[error("invalid amount: '{0}'")]
    InvalidAmount(String),

    /// The amount parsed but was zero or negative
    #[error("non-positive amount: {0}")]
    NonPositiveAmount(Money),

    /// The amount is a number but larger than a single entry may carry
    #[error("amount out of range: '{0}' (maximum {max})", max = Money::MAX)]
    AmountOutOfRange(String),
}

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Bad user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Saving the ledger failed
    #[error("I/O error: {0}")]
    Io(String),

    /// The saved ledger exists but could not be read back
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a corrupt data error
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
