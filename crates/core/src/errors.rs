//! Core error types for the Smartfolio engines.
//!
//! Every rejected input surfaces as [`Error::Validation`]; numeric edge cases
//! such as an empty holdings list are turned into validation errors before any
//! arithmetic runs, so no NaN or infinity ever reaches a caller.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the scoring and simulation engines.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid navigation: {0}")]
    InvalidTransition(String),
}

impl Error {
    /// Shorthand for an `InvalidField` validation error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidField {
            field: field.into(),
            message: message.into(),
        })
    }

    /// Returns true when the caller supplied bad input (the 400 class).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value for '{field}': {message}")]
    InvalidField { field: String, message: String },

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
