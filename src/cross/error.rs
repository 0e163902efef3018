// src/cross/error.rs
use thiserror::Error;

use super::calculator::MIN_INPUT;

/// Rejected user input. Always recoverable: the caller clears the cross and re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a number.")]
    Empty,
    #[error("'{0}' is not a whole number.")]
    NotANumber(String),
    #[error("{0} is too small; the number must be at least {min}.", min = MIN_INPUT)]
    BelowMinimum(i64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrossError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Unknown category '{0}' (expected naari, maai, hawaai or khaki).")]
    UnknownCategory(String),
    #[error("Unknown numeral script '{0}' (expected western or urdu).")]
    UnknownScript(String),
}

impl CrossError {
    /// Category/script tags come from configuration, not from the number the user typed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CrossError::UnknownCategory(_) | CrossError::UnknownScript(_)
        )
    }
}
