//! Error types for sortscope.
//!
//! Every fallible operation returns `Result<T, SortError>` instead of
//! panicking. Collaborator errors raised during playback are not wrapped
//! here; the player hands them back to the caller untouched.

use thiserror::Error;

/// Result type alias for sortscope operations.
pub type SortResult<T> = Result<T, SortError>;

/// Unified error type for sortscope operations.
#[derive(Debug, Error)]
pub enum SortError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Algorithm name that does not match any known sort.
    #[error("Unknown algorithm '{0}' (expected one of: bubble, insertion, selection, quick, merge, bogo, sleep)")]
    UnknownAlgorithm(String),

    /// More distinct values requested than the value range holds.
    #[error("Cannot sample {requested} distinct values from a range of {available}")]
    SampleTooLarge {
        /// Number of values requested.
        requested: usize,
        /// Number of distinct values in the range.
        available: usize,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File or terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SortError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Whether the error stems from bad user input rather than the environment.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config { .. }
                | Self::UnknownAlgorithm(_)
                | Self::SampleTooLarge { .. }
                | Self::YamlParse(_)
                | Self::Validation(_)
        )
    }
}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
