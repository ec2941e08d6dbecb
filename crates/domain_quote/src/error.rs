//! Quote domain errors
//!
//! Every error here is a local validation failure. None of them can be
//! recovered from part-way through a calculation; the caller has to collect
//! corrected input and ask again.

use core_kernel::CoreError;
use thiserror::Error;

use crate::rating::RatingTableError;

/// Errors that can occur while turning input into an estimate
#[derive(Debug, Error)]
pub enum QuoteError {
    /// A closed-set field carried a value outside its set
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
    },

    /// A numeric field is outside its permitted range
    #[error("{field} out of range ({value}): {reason}")]
    OutOfRangeNumeric {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// Required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A numeric field could not be parsed
    #[error("Invalid number '{value}' for {field}")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },

    /// Rating table could not be loaded
    #[error(transparent)]
    RatingTable(#[from] RatingTableError),

    /// Kernel error
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl QuoteError {
    /// Creates an invalid enum value error
    pub fn invalid_enum(field: &'static str, value: impl Into<String>) -> Self {
        QuoteError::InvalidEnumValue {
            field,
            value: value.into(),
        }
    }

    /// Creates an out-of-range error
    pub fn out_of_range(
        field: &'static str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::OutOfRangeNumeric {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        QuoteError::MissingRequiredField(field.into())
    }
}
