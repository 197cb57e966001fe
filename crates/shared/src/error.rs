//! Library-wide error types.
//!
//! Numeric pagination input never produces an error; it is clamped instead.
//! The variants here cover the few places where a caller can hand us
//! something unusable.

use thiserror::Error;

/// Result type alias using `PageError`.
pub type PageResult<T> = Result<T, PageError>;

/// Pagination error types.
#[derive(Debug, Error)]
pub enum PageError {
    /// URL template has no page placeholder.
    #[error("URL template `{template}` does not contain the page placeholder")]
    MissingPlaceholder {
        /// The rejected template.
        template: String,
    },

    /// URL template has the page placeholder more than once.
    #[error("URL template `{template}` contains the page placeholder {count} times")]
    RepeatedPlaceholder {
        /// The rejected template.
        template: String,
        /// Number of placeholder occurrences found.
        count: usize,
    },

    /// Summary could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PageError {
    /// Returns the stable error code for structured output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingPlaceholder { .. } => "MISSING_PLACEHOLDER",
            Self::RepeatedPlaceholder { .. } => "REPEATED_PLACEHOLDER",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for PageError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
