//! CLI error handling

use core_kernel::{CoreError, MoneyError};
use domain_quote::{QuoteError, RatingTableError};
use serde::Serialize;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid input: {0}")]
    Input(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<MoneyError> for CliError {
    fn from(err: MoneyError) -> Self {
        CliError::Core(CoreError::Money(err))
    }
}

impl From<RatingTableError> for CliError {
    fn from(err: RatingTableError) -> Self {
        CliError::Quote(QuoteError::RatingTable(err))
    }
}

/// Error body written to stdout in place of an estimate
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl CliError {
    /// Machine-readable error body
    pub fn to_response(&self) -> ErrorResponse {
        let (error_type, field) = match self {
            CliError::Config(_) | CliError::Core(CoreError::Configuration(_)) => ("configuration_error", None),
            CliError::Input(_) => ("invalid_input", None),
            CliError::Io(_) => ("io_error", None),
            CliError::Quote(QuoteError::InvalidEnumValue { field, .. }) => {
                ("invalid_enum_value", Some(field.to_string()))
            }
            CliError::Quote(QuoteError::OutOfRangeNumeric { field, .. }) => {
                ("out_of_range", Some(field.to_string()))
            }
            CliError::Quote(QuoteError::InvalidNumber { field, .. }) => {
                ("invalid_number", Some(field.to_string()))
            }
            CliError::Quote(QuoteError::MissingRequiredField(field)) => {
                ("missing_field", Some(field.clone()))
            }
            CliError::Quote(QuoteError::RatingTable(_)) => ("rating_table_error", None),
            CliError::Quote(QuoteError::Core(_)) | CliError::Core(_) => ("internal_error", None),
        };

        ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            field,
        }
    }
}
