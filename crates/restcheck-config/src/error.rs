//! Error types for configuration loading.

/// Errors raised while constructing [`Settings`](crate::Settings).
///
/// Configuration errors are not recoverable and are never retried: the
/// process should fail before any test runs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        /// The environment variable name.
        var: &'static str,
        /// The offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// A parsed value violated a documented constraint.
    #[error("{var} out of range: {value:?} ({constraint})")]
    OutOfRange {
        /// The environment variable name.
        var: &'static str,
        /// The offending value.
        value: String,
        /// The constraint that was violated.
        constraint: &'static str,
    },
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
