//! Core retry behavior tests.
//!
//! Covers:
//! - Success on first attempt (no wasted retries)
//! - Success after N retries
//! - Exhausting all attempts propagates the last failure unchanged
//! - Stop retrying on non-retryable failure
//! - Wrapped invocations are independent

use std::fmt;
use std::time::{Duration, Instant};

use restcheck_retry::{Retry, RetryConfig};

#[derive(Debug, Clone, PartialEq)]
struct TestError {
    message: String,
}

impl TestError {
    fn new(msg: &str) -> Self {
        Self {
            message: msg.to_string(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[test]
fn success_on_first_attempt_no_retry() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(5)
        .fixed_backoff(Duration::from_millis(10))
        .build()
        .wrap();

    let mut calls = 0;
    let result = retry.run(|| {
        calls += 1;
        Ok::<_, TestError>(format!("Response: {calls}"))
    });

    assert_eq!(result.unwrap(), "Response: 1");
    assert_eq!(calls, 1);
}

#[test]
fn success_after_one_retry() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(3)
        .fixed_backoff(Duration::from_millis(10))
        .build()
        .wrap();

    let mut calls = 0;
    let result = retry.run(|| {
        calls += 1;
        if calls == 1 {
            Err(TestError::new("first attempt failed"))
        } else {
            Ok("success")
        }
    });

    assert_eq!(result.unwrap(), "success");
    assert_eq!(calls, 2);
}

#[test]
fn success_after_multiple_retries() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(6)
        .fixed_backoff(Duration::from_millis(10))
        .build()
        .wrap();

    let mut calls = 0;
    let result = retry.run(|| {
        calls += 1;
        if calls < 5 {
            Err(TestError::new("temporary failure"))
        } else {
            Ok("success")
        }
    });

    assert_eq!(result.unwrap(), "success");
    assert_eq!(calls, 5);
}

#[test]
fn exhaust_all_attempts_propagates_last_failure() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(4)
        .fixed_backoff(Duration::from_millis(10))
        .build()
        .wrap();

    let mut calls = 0;
    let result: Result<(), _> = retry.run(|| {
        calls += 1;
        Err(TestError::new(&format!("permanent failure {calls}")))
    });

    // The terminal failure is the last one, with its message intact.
    assert_eq!(result.unwrap_err().message, "permanent failure 4");
    assert_eq!(calls, 4);
}

#[test]
fn two_attempts_surface_the_second_failure() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(2)
        .fixed_backoff(Duration::ZERO)
        .build()
        .wrap();

    let mut calls = 0;
    let result: Result<(), _> = retry.run(|| {
        calls += 1;
        Err(TestError::new(&format!("boom {calls}")))
    });

    assert_eq!(result.unwrap_err(), TestError::new("boom 2"));
    assert_eq!(calls, 2);
}

#[test]
fn single_attempt_is_a_plain_invocation() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(1)
        .fixed_backoff(Duration::from_secs(5))
        .build()
        .wrap();

    let mut calls = 0;
    let start = Instant::now();
    let result: Result<(), _> = retry.run(|| {
        calls += 1;
        Err(TestError::new("error"))
    });

    assert!(result.is_err());
    assert_eq!(calls, 1);
    // No delay and no retry with a budget of one.
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn max_attempts_two_allows_one_retry() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(2)
        .fixed_backoff(Duration::from_millis(10))
        .build()
        .wrap();

    let mut calls = 0;
    let result = retry.run(|| {
        calls += 1;
        if calls == 1 {
            Err(TestError::new("first attempt failed"))
        } else {
            Ok("success")
        }
    });

    assert_eq!(result.unwrap(), "success");
    assert_eq!(calls, 2);
}

#[test]
fn stop_on_non_retryable_failure() {
    #[derive(Debug, Clone, PartialEq)]
    enum Error {
        Retryable,
        NonRetryable,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::Retryable => write!(f, "retryable"),
                Error::NonRetryable => write!(f, "non-retryable"),
            }
        }
    }

    let retry: Retry<Error> = RetryConfig::builder()
        .max_attempts(5)
        .fixed_backoff(Duration::from_millis(10))
        .retry_on(|e: &Error| matches!(e, Error::Retryable))
        .build()
        .wrap();

    let mut calls = 0;
    let result: Result<(), _> = retry.run(|| {
        calls += 1;
        if calls == 1 {
            Err(Error::Retryable)
        } else {
            Err(Error::NonRetryable)
        }
    });

    // First attempt (retryable) triggers a retry, second (non-retryable) stops.
    assert_eq!(result.unwrap_err(), Error::NonRetryable);
    assert_eq!(calls, 2);
}

#[test]
fn sequential_invocations_are_independent() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(3)
        .fixed_backoff(Duration::from_millis(10))
        .build()
        .wrap();

    let mut calls = 0;
    // First invocation: fails once, then succeeds.
    let first = retry.run(|| {
        calls += 1;
        if calls == 1 {
            Err(TestError::new("fail"))
        } else {
            Ok("first")
        }
    });
    assert_eq!(first.unwrap(), "first");
    assert_eq!(calls, 2);

    // Second invocation starts from attempt 1 again.
    let second = retry.run(|| {
        calls += 1;
        if calls == 3 {
            Err(TestError::new("fail"))
        } else {
            Ok("second")
        }
    });
    assert_eq!(second.unwrap(), "second");
    assert_eq!(calls, 4);
}

#[test]
fn cloned_wrapper_preserves_retry_behavior() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(2)
        .fixed_backoff(Duration::ZERO)
        .build()
        .wrap();
    let clone = retry.clone();

    let mut calls = 0;
    let result = clone.run(|| {
        calls += 1;
        if calls == 1 {
            Err(TestError::new("flake"))
        } else {
            Ok(calls)
        }
    });

    assert_eq!(result.unwrap(), 2);
}

#[test]
fn end_to_end_fail_twice_then_succeed() {
    // Wrap a body that fails twice and returns 42 on the third call, with
    // max_attempts=3, delay=10ms, backoff=2.0. The result is 42, exactly
    // three invocations occur, and the elapsed time covers both waits
    // (10ms + 20ms).
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(3)
        .backoff(
            restcheck_retry::ExponentialBackoff::new(Duration::from_millis(10)).multiplier(2.0),
        )
        .build()
        .wrap();

    let mut calls = 0;
    let start = Instant::now();
    let result = retry.run(|| {
        calls += 1;
        if calls < 3 {
            Err(TestError::new("flaky"))
        } else {
            Ok(42)
        }
    });
    let elapsed = start.elapsed();

    assert_eq!(result.unwrap(), 42);
    assert_eq!(calls, 3);
    assert!(
        elapsed >= Duration::from_millis(30),
        "expected at least 10ms + 20ms of backoff, elapsed {elapsed:?}"
    );
}
