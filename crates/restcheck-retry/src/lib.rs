//! Retry wrapper for flaky test bodies.
//!
//! Wraps any `FnMut() -> Result<T, E>` test body and re-executes it with a
//! bounded attempt budget, pluggable backoff, and failure classification:
//!
//! - **Interval functions**: fixed, exponential, exponential with jitter, or
//!   custom closures.
//! - **Retry predicates**: control which failure kinds are retried. By
//!   default every failure is retryable (the flaky-test default).
//! - **Events and logging**: each attempt emits a log record and an event;
//!   both are diagnostic side channels and never affect the outcome.
//!
//! The wrapper knows nothing about HTTP, only about "the body returned `Ok`"
//! vs "the body returned `Err`". The failure that finally propagates is the
//! last one observed, unchanged; it is never wrapped or summarized.
//!
//! Execution is synchronous: the wait between attempts is a blocking
//! [`std::thread::sleep`] on the calling thread, and no sleep occurs after
//! the final attempt.
//!
//! # Examples
//!
//! ```
//! use restcheck_retry::RetryConfig;
//! use std::time::Duration;
//!
//! let retry = RetryConfig::<String>::builder()
//!     .max_attempts(3)
//!     .exponential_backoff(Duration::from_millis(10))
//!     .name("films-contract")
//!     .build()
//!     .wrap();
//!
//! let mut calls = 0;
//! let result = retry.run(|| {
//!     calls += 1;
//!     if calls < 3 {
//!         Err("connection reset".to_string())
//!     } else {
//!         Ok(42)
//!     }
//! });
//! assert_eq!(result, Ok(42));
//! ```

mod backoff;
mod config;
mod events;
mod policy;

pub use backoff::{
    ExponentialBackoff, ExponentialRandomBackoff, FixedInterval, FnInterval, IntervalFunction,
};
pub use config::{RetryConfig, RetryConfigBuilder};
pub use events::RetryEvent;
pub use policy::{RetryPolicy, RetryPredicate};

use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Executes test bodies under a [`RetryConfig`].
///
/// One `Retry` instance may be reused across sequential invocations; the
/// configuration is shared immutably, and all per-invocation state (attempt
/// index, captured failure) lives on the stack of [`run`](Retry::run).
pub struct Retry<E> {
    config: Arc<RetryConfig<E>>,
}

impl<E> Retry<E> {
    /// Creates a new `Retry` from the given configuration.
    pub fn new(config: RetryConfig<E>) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The configuration this wrapper runs under.
    pub fn config(&self) -> &RetryConfig<E> {
        &self.config
    }
}

impl<E> Clone for Retry<E> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
        }
    }
}

impl<E> Retry<E>
where
    E: fmt::Display,
{
    /// Runs the body until it succeeds, the attempt budget is exhausted, or a
    /// non-retryable failure occurs.
    ///
    /// Returns the body's success value untouched, or the terminal failure
    /// unchanged. Exhausting attempts always re-signals the last failure; a
    /// sentinel value is never substituted.
    pub fn run<T, F>(&self, mut f: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
    {
        let name = &self.config.name;
        let max_attempts = self.config.policy.max_attempts();
        let mut attempt = 1usize;

        loop {
            tracing::info!(name = %name, attempt, max_attempts, "attempt {attempt}/{max_attempts}");

            match f() {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!(name = %name, attempt, "passed on attempt {attempt}");
                    }
                    self.config.event_listeners.emit(&RetryEvent::Success {
                        source: name.clone(),
                        timestamp: Instant::now(),
                        attempts: attempt,
                    });
                    return Ok(value);
                }
                Err(error) => {
                    if !self.config.policy.should_retry(&error) {
                        tracing::info!(
                            name = %name,
                            attempt,
                            "failure is not retryable, propagating: {error}"
                        );
                        self.config.event_listeners.emit(&RetryEvent::IgnoredError {
                            source: name.clone(),
                            timestamp: Instant::now(),
                        });
                        return Err(error);
                    }

                    if attempt >= max_attempts {
                        tracing::error!(
                            name = %name,
                            attempts = max_attempts,
                            "failed after {max_attempts} attempts: {error}"
                        );
                        self.config.event_listeners.emit(&RetryEvent::Exhausted {
                            source: name.clone(),
                            timestamp: Instant::now(),
                            attempts: max_attempts,
                        });
                        return Err(error);
                    }

                    let delay = self.config.policy.next_backoff(attempt - 1);
                    tracing::warn!(
                        name = %name,
                        attempt,
                        max_attempts,
                        "failed on attempt {attempt}/{max_attempts}: {error}"
                    );
                    tracing::info!(name = %name, ?delay, "waiting before retry");
                    self.config.event_listeners.emit(&RetryEvent::Retry {
                        source: name.clone(),
                        timestamp: Instant::now(),
                        attempt,
                        delay,
                    });

                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }
}
