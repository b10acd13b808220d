//! Validation error types

use std::fmt;

/// Form input that could not be coerced into the expected type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field should hold an integer id
    NotAnId { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnId { field, value } => {
                write!(f, "{} must be a numeric id, got '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
