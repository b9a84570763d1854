//! Error types.

use thiserror::Error;

/// Top-level error type for fixture generation.
///
/// Every failure is a precondition violation detected before any entropy is
/// consumed. The message is the observable contract, so `Display` renders it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// An argument violated the operation's preconditions.
    #[error("{0}")]
    InvalidArgument(String),
}

impl FixtureError {
    /// Builds an `InvalidArgument` error from any message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns the human-readable message carried by the error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) => message,
        }
    }
}

/// Checks a precondition, producing the message lazily on failure.
///
/// # Errors
///
/// Returns `FixtureError::InvalidArgument` carrying `message()` when
/// `condition` is false.
pub fn ensure<F, M>(condition: bool, message: F) -> Result<(), FixtureError>
where
    F: FnOnce() -> M,
    M: Into<String>,
{
    if condition {
        Ok(())
    } else {
        Err(FixtureError::invalid(message()))
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The seed variable is set but is not a decimal `u64`.
    #[error("{variable} must be an unsigned 64-bit integer, got '{value}': {reason}")]
    InvalidSeed {
        /// Name of the environment variable.
        variable: &'static str,
        /// The raw value that failed to parse.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
}
