//! Retry policy: attempt budget, backoff schedule, and failure classification.

use crate::backoff::IntervalFunction;
use std::sync::Arc;
use std::time::Duration;

/// Predicate deciding whether a failure is eligible for retry.
pub type RetryPredicate<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// An immutable retry policy.
///
/// Constructed once (via [`RetryConfigBuilder`](crate::RetryConfigBuilder))
/// and shared read-only by every invocation of the wrapper.
pub struct RetryPolicy<E> {
    pub(crate) max_attempts: usize,
    pub(crate) interval_fn: Arc<dyn IntervalFunction>,
    pub(crate) retry_predicate: Option<RetryPredicate<E>>,
}

impl<E> RetryPolicy<E> {
    /// Creates a policy with the given attempt budget and backoff schedule.
    ///
    /// `max_attempts` includes the initial attempt; a value of 1 degenerates
    /// to a plain call with no retry and no sleep.
    pub fn new(max_attempts: usize, interval_fn: Arc<dyn IntervalFunction>) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval_fn,
            retry_predicate: None,
        }
    }

    /// Maximum number of attempts, including the first.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Whether the given failure is eligible for retry.
    ///
    /// Without an explicit predicate **every** failure kind is retryable,
    /// including plain assertion failures. That default matches the flaky-test
    /// use case but can mask genuine regressions as flakiness; narrow it with
    /// [`retry_on`](crate::RetryConfigBuilder::retry_on) when that matters.
    pub fn should_retry(&self, error: &E) -> bool {
        match &self.retry_predicate {
            Some(predicate) => predicate(error),
            None => true,
        }
    }

    /// The wait after the `attempt`-th failure (0-based).
    pub fn next_backoff(&self, attempt: usize) -> Duration {
        self.interval_fn.interval(attempt)
    }
}

impl<E> Clone for RetryPolicy<E> {
    fn clone(&self) -> Self {
        Self {
            max_attempts: self.max_attempts,
            interval_fn: Arc::clone(&self.interval_fn),
            retry_predicate: self.retry_predicate.clone(),
        }
    }
}
