//! Validation errors raised by the rover's setters.

use std::num::IntErrorKind;
use thiserror::Error;

/// Rejected grid or pose input.
///
/// Every variant names the field that failed and the value that was received,
/// so the message can be shown to a user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} expects {expected} space separated values, got {found}: '{input}'")]
    TokenCount {
        field: &'static str,
        expected: usize,
        found: usize,
        input: String,
    },

    #[error("{field} must be an integer, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} is too large to be a coordinate, got '{value}'")]
    TooLarge { field: &'static str, value: String },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i32 },

    #[error("direction must be one of N, E, S or W, got '{value}'")]
    InvalidDirection { value: String },

    #[error("{field} must be between 0 and {max}, got {value}")]
    OutOfBounds {
        field: &'static str,
        value: i32,
        max: i32,
    },
}

impl ValidationError {
    /// The input field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TokenCount { field, .. }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::TooLarge { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::OutOfBounds { field, .. } => field,
            ValidationError::InvalidDirection { .. } => "direction",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Splits `input` on whitespace and checks it has exactly `expected` tokens.
pub(crate) fn tokens<'a>(
    field: &'static str,
    input: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != expected {
        return Err(ValidationError::TokenCount {
            field,
            expected,
            found: parts.len(),
            input: input.to_string(),
        });
    }
    Ok(parts)
}

/// Parses a single integer token.
///
/// Integers that do not fit in `i32` are reported as [`ValidationError::TooLarge`].
pub(crate) fn integer(field: &'static str, token: &str) -> Result<i32> {
    token.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValidationError::TooLarge {
            field,
            value: token.to_string(),
        },
        _ => ValidationError::NotANumber {
            field,
            value: token.to_string(),
        },
    })
}
