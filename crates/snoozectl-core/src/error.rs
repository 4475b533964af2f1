//! Malformed-input taxonomy for snooze configuration.
//!
//! None of these are ever returned by the resolver itself: resolution always
//! degrades to a fallback. They surface through the `try_*` helpers and as
//! diagnostics on [`crate::resolver::Resolution`].

use thiserror::Error;

/// Result type for fallible snooze configuration helpers.
pub type SnoozeConfigResult<T> = Result<T, SnoozeConfigError>;

/// A reason an override (or a piece of one) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnoozeConfigError {
    /// A non-empty pair in the override string has no `=`.
    #[error("'{pair}' is not a valid key-value pair")]
    MalformedPair { pair: String },

    /// A token in an `options_array` value is not a non-negative integer.
    #[error("'{token}' is not a valid number of minutes")]
    InvalidInteger { token: String },

    /// An `options_array` value contained no tokens at all.
    #[error("options list is empty")]
    EmptyList,

    /// The `default` value is not a non-negative integer.
    #[error("default '{value}' is not a valid number of minutes")]
    InvalidDefault { value: String },

    /// The requested default is not one of the resolved options.
    #[error("default of {minutes} minutes is not among the options")]
    DefaultNotInOptions { minutes: u32 },

    /// The option list was longer than the configured cap.
    #[error("options list truncated from {from} to {to} entries")]
    Truncated { from: usize, to: usize },

    /// Compiled-in defaults must contain at least one option.
    #[error("default options list must not be empty")]
    EmptyDefaults,
}

impl SnoozeConfigError {
    /// Creates a malformed pair error.
    pub fn malformed_pair(pair: impl Into<String>) -> Self {
        Self::MalformedPair { pair: pair.into() }
    }

    /// Creates an invalid integer error.
    pub fn invalid_integer(token: impl Into<String>) -> Self {
        Self::InvalidInteger {
            token: token.into(),
        }
    }

    /// Creates an invalid default error.
    pub fn invalid_default(value: impl Into<String>) -> Self {
        Self::InvalidDefault {
            value: value.into(),
        }
    }
}
