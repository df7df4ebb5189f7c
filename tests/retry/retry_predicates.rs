//! Retry predicate filtering tests.
//!
//! Covers:
//! - Retry all failure kinds (the documented default)
//! - Retry only selected kinds
//! - Assertion failures are retryable by default
//! - Stateful predicate logic

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use restcheck_harness::TestFailure;
use restcheck_retry::{Retry, RetryConfig};

#[derive(Debug, Clone, PartialEq)]
enum TestError {
    Transient,
    Permanent,
}

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestError::Transient => write!(f, "transient"),
            TestError::Permanent => write!(f, "permanent"),
        }
    }
}

#[test]
fn all_failure_kinds_retryable_by_default() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(5)
        .fixed_backoff(Duration::from_millis(10))
        .build()
        .wrap();

    let mut calls = 0;
    let result = retry.run(|| {
        calls += 1;
        match calls {
            1 => Err(TestError::Transient),
            2 => Err(TestError::Permanent),
            _ => Ok("success"),
        }
    });

    // Both kinds were retried under the default policy.
    assert_eq!(result.unwrap(), "success");
    assert_eq!(calls, 3);
}

#[test]
fn predicate_narrows_to_selected_kinds() {
    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(5)
        .fixed_backoff(Duration::from_millis(10))
        .retry_on(|e: &TestError| matches!(e, TestError::Transient))
        .build()
        .wrap();

    let mut calls = 0;
    let result: Result<(), _> = retry.run(|| {
        calls += 1;
        Err(TestError::Permanent)
    });

    assert_eq!(result.unwrap_err(), TestError::Permanent);
    assert_eq!(calls, 1);
}

#[test]
fn assertion_failures_retry_by_default() {
    // The demonstrated use case: an intermittently failing assertion is
    // treated as flaky unless the predicate says otherwise.
    let retry: Retry<TestFailure> = RetryConfig::builder()
        .max_attempts(3)
        .fixed_backoff(Duration::ZERO)
        .build()
        .wrap();

    let mut calls = 0;
    let result = retry.run(|| {
        calls += 1;
        if calls < 3 {
            Err(TestFailure::Assertion(format!(
                "expected 200, got 500 (call {calls})"
            )))
        } else {
            Ok(200u16)
        }
    });

    assert_eq!(result.unwrap(), 200);
    assert_eq!(calls, 3);
}

#[test]
fn transport_only_policy_stops_on_assertions() {
    let retry: Retry<TestFailure> = RetryConfig::builder()
        .max_attempts(5)
        .fixed_backoff(Duration::ZERO)
        .retry_on(TestFailure::is_transport)
        .build()
        .wrap();

    let mut calls = 0;
    let result: Result<(), TestFailure> = retry.run(|| {
        calls += 1;
        Err(TestFailure::Assertion("expected 6 films, got 5".into()))
    });

    let failure = result.unwrap_err();
    assert!(failure.is_assertion());
    assert_eq!(
        failure.to_string(),
        "assertion failed: expected 6 films, got 5"
    );
    assert_eq!(calls, 1);
}

#[test]
fn predicate_runs_once_per_failure() {
    let inspected = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&inspected);

    let retry: Retry<TestError> = RetryConfig::builder()
        .max_attempts(4)
        .fixed_backoff(Duration::ZERO)
        .retry_on(move |_e: &TestError| {
            counter.fetch_add(1, Ordering::SeqCst);
            true
        })
        .build()
        .wrap();

    let mut calls = 0;
    let _ = retry.run(|| {
        calls += 1;
        Err::<(), _>(TestError::Transient)
    });

    assert_eq!(calls, 4);
    assert_eq!(inspected.load(Ordering::SeqCst), 4);
}
