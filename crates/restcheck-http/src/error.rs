//! Error types for the HTTP layer.

/// Failures raised by the HTTP layer.
///
/// Only raised faults live here: connection errors, timeouts, and malformed
/// bodies. HTTP status codes (200, 404, ...) are **not** failures at this
/// layer; they surface through [`ApiResponse`](crate::ApiResponse) for the
/// caller's assertions to judge.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// A transport fault: connection refused, DNS failure, timeout, etc.
    #[error("transport fault: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the JSON the caller asked for.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    /// The response body was not valid UTF-8 text.
    #[error("response body is not valid UTF-8: {0}")]
    InvalidBody(#[from] std::str::Utf8Error),
}

impl HttpError {
    /// Whether this failure is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HttpError::Transport(e) if e.is_timeout())
    }

    /// Whether this failure occurred while connecting.
    pub fn is_connect(&self) -> bool {
        matches!(self, HttpError::Transport(e) if e.is_connect())
    }
}

/// Result type for HTTP operations.
pub type Result<T> = std::result::Result<T, HttpError>;
