//! The test failure taxonomy and non-panicking assertion macros.

use restcheck_http::HttpError;

/// A test failure.
///
/// Two kinds exist: an expectation that was not met, and a transport fault
/// that bubbled up from the HTTP layer unchanged. Both are retryable under
/// the default retry policy; use the `is_*` helpers to build a narrower
/// predicate.
#[derive(Debug, thiserror::Error)]
pub enum TestFailure {
    /// A test expectation was not met.
    #[error("assertion failed: {0}")]
    Assertion(String),
    /// A transport fault raised by the HTTP layer, passed through unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl TestFailure {
    /// Whether this failure is an unmet expectation.
    pub fn is_assertion(&self) -> bool {
        matches!(self, TestFailure::Assertion(_))
    }

    /// Whether this failure is a transport fault.
    pub fn is_transport(&self) -> bool {
        matches!(self, TestFailure::Http(_))
    }
}

/// Fails the test with [`TestFailure::Assertion`] when the condition is false.
///
/// Unlike `assert!`, this returns an `Err` instead of panicking, so test
/// bodies compose with `?` and with the retry wrapper.
///
/// ```
/// use restcheck_harness::{check, TestFailure};
///
/// fn body(status: u16) -> Result<(), TestFailure> {
///     check!(status == 200, "expected 200, got {status}");
///     Ok(())
/// }
///
/// assert!(body(200).is_ok());
/// assert!(body(404).unwrap_err().is_assertion());
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            return Err($crate::TestFailure::Assertion(format!(
                "check failed: {}",
                stringify!($cond)
            ))
            .into());
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::TestFailure::Assertion(format!($($arg)+)).into());
        }
    };
}

/// Fails the test when the two expressions are not equal.
///
/// The failure message includes both values; an optional trailing format
/// string adds context.
#[macro_export]
macro_rules! check_eq {
    ($expected:expr, $actual:expr $(,)?) => {{
        let expected = &$expected;
        let actual = &$actual;
        if expected != actual {
            return Err($crate::TestFailure::Assertion(format!(
                "expected {expected:?}, got {actual:?}"
            ))
            .into());
        }
    }};
    ($expected:expr, $actual:expr, $($arg:tt)+) => {{
        let expected = &$expected;
        let actual = &$actual;
        if expected != actual {
            return Err($crate::TestFailure::Assertion(format!(
                "{}: expected {expected:?}, got {actual:?}",
                format!($($arg)+)
            ))
            .into());
        }
    }};
}
