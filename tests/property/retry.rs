//! Property tests for the retry wrapper.
//!
//! Invariants tested:
//! - Never exceeds max_attempts
//! - Stops at the first success
//! - Retry predicate is respected
//! - Exponential delay schedule matches the documented formula

use proptest::prelude::*;
use std::time::Duration;

use restcheck_retry::{ExponentialBackoff, IntervalFunction, Retry, RetryConfig};

/// A cloneable error type for testing
#[derive(Debug, Clone, PartialEq)]
enum TestError {
    Retryable,
    Fatal,
}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::Retryable => write!(f, "retryable error"),
            TestError::Fatal => write!(f, "fatal error"),
        }
    }
}

impl std::error::Error for TestError {}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: a body that always fails is invoked exactly max_attempts times
    #[test]
    fn retry_respects_max_attempts(max_attempts in 1usize..=10) {
        let retry: Retry<TestError> = RetryConfig::builder()
            .max_attempts(max_attempts)
            .fixed_backoff(Duration::ZERO)
            .build()
            .wrap();

        let mut calls = 0;
        let result: Result<(), _> = retry.run(|| {
            calls += 1;
            Err(TestError::Retryable)
        });

        prop_assert!(result.is_err());
        prop_assert_eq!(calls, max_attempts);
    }

    /// Property: the body stops being invoked at the first success
    #[test]
    fn retry_stops_at_first_success(
        max_attempts in 1usize..=10,
        succeed_on in 1usize..=10,
    ) {
        let retry: Retry<TestError> = RetryConfig::builder()
            .max_attempts(max_attempts)
            .fixed_backoff(Duration::ZERO)
            .build()
            .wrap();

        let mut calls = 0;
        let result = retry.run(|| {
            calls += 1;
            if calls >= succeed_on {
                Ok(calls)
            } else {
                Err(TestError::Retryable)
            }
        });

        if succeed_on <= max_attempts {
            prop_assert_eq!(result.unwrap(), succeed_on);
            prop_assert_eq!(calls, succeed_on);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(calls, max_attempts);
        }
    }

    /// Property: a non-retryable failure is never retried, whatever the budget
    #[test]
    fn fatal_failure_short_circuits(max_attempts in 1usize..=10) {
        let retry: Retry<TestError> = RetryConfig::builder()
            .max_attempts(max_attempts)
            .fixed_backoff(Duration::ZERO)
            .retry_on(|e: &TestError| matches!(e, TestError::Retryable))
            .build()
            .wrap();

        let mut calls = 0;
        let result: Result<(), _> = retry.run(|| {
            calls += 1;
            Err(TestError::Fatal)
        });

        prop_assert_eq!(result.unwrap_err(), TestError::Fatal);
        prop_assert_eq!(calls, 1);
    }

    /// Property: the exponential schedule is initial × multiplier^attempt
    #[test]
    fn exponential_schedule_matches_formula(
        initial_ms in 1u64..=500,
        multiplier in 1.0f64..=4.0,
        attempt in 0usize..=6,
    ) {
        let initial = Duration::from_millis(initial_ms);
        let backoff = ExponentialBackoff::new(initial).multiplier(multiplier);

        let expected = initial.mul_f64(multiplier.powi(attempt as i32));
        prop_assert_eq!(backoff.interval(attempt), expected);
    }
}
