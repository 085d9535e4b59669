//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field doesn't parse as an integer
    NotAnInteger { field: &'static str, value: String },

    /// Integer field is zero or negative
    NotPositive { field: &'static str },

    /// Field doesn't parse as a calendar date
    InvalidDate { field: &'static str, value: String },

    /// Request body couldn't be decoded at all
    UnreadableBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::NotAnInteger { field, value } => {
                write!(f, "{} must be a number, got '{}'", field, value)
            }
            Self::NotPositive { field } => write!(f, "{} must be a positive integer", field),
            Self::InvalidDate { field, value } => {
                write!(f, "invalid {} date '{}', use yyyy-mm-dd", field, value)
            }
            Self::UnreadableBody { reason } => write!(f, "unreadable request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
