use restcheck_core::events::HarnessEvent;
use std::time::{Duration, Instant};

/// Events emitted by the retry wrapper.
#[derive(Debug, Clone)]
pub enum RetryEvent {
    /// A retry is about to be made after a retryable failure.
    Retry {
        source: String,
        timestamp: Instant,
        /// The attempt that just failed (1-based).
        attempt: usize,
        /// The wait before the next attempt.
        delay: Duration,
    },
    /// The wrapped body succeeded (either on the first try or after retries).
    Success {
        source: String,
        timestamp: Instant,
        /// Total attempts made, including the successful one.
        attempts: usize,
    },
    /// All attempts were exhausted; the last failure propagates to the caller.
    Exhausted {
        source: String,
        timestamp: Instant,
        attempts: usize,
    },
    /// A failure occurred but was not retried (filtered by the predicate).
    IgnoredError { source: String, timestamp: Instant },
}

impl HarnessEvent for RetryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RetryEvent::Retry { .. } => "retry",
            RetryEvent::Success { .. } => "success",
            RetryEvent::Exhausted { .. } => "exhausted",
            RetryEvent::IgnoredError { .. } => "ignored_error",
        }
    }

    fn timestamp(&self) -> Instant {
        match self {
            RetryEvent::Retry { timestamp, .. }
            | RetryEvent::Success { timestamp, .. }
            | RetryEvent::Exhausted { timestamp, .. }
            | RetryEvent::IgnoredError { timestamp, .. } => *timestamp,
        }
    }

    fn source(&self) -> &str {
        match self {
            RetryEvent::Retry { source, .. }
            | RetryEvent::Success { source, .. }
            | RetryEvent::Exhausted { source, .. }
            | RetryEvent::IgnoredError { source, .. } => source,
        }
    }
}
