//! Error types for the harness layer.

/// Failures of the harness machinery itself (not of tests).
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// Creating or writing a log/report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing a report record failed.
    #[error("failed to serialize report record: {0}")]
    Json(#[from] serde_json::Error),
    /// Installing the global tracing subscriber failed (usually because one
    /// is already installed).
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
