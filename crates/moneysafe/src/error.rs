//! Error types for money construction and parsing.

use std::fmt::Display;

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while building a `Money` value.
///
/// Arithmetic, accessors and formatting are total; only construction and
/// parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The input cannot be interpreted as a finite amount.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount {
        /// The rejected input, as given.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The text does not match `<optional symbol><decimal number>`.
    #[error("Cannot parse money from '{input}': {reason}")]
    Parse {
        /// The rejected text.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl MoneyError {
    /// Builds an `InvalidAmount` error.
    pub fn invalid_amount(input: impl Display, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Builds a `Parse` error.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::Parse { .. } => "PARSE_ERROR",
        }
    }
}
