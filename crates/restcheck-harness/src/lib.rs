//! Harness layer for restcheck: session lifecycle, logging, and reporting.
//!
//! This crate is orchestration only; no retry or HTTP policy lives here:
//!
//! - [`init_logging`]: one timestamped run-log file per process, mirrored to
//!   stderr, at the configured level.
//! - [`TestSession`] / [`ReportWriter`]: per-test JSON records with failure
//!   text attached, plus a run summary whose [`RunSummary::is_success`] maps
//!   to the standard zero/non-zero exit convention.
//! - [`TestFailure`] and the [`check!`]/[`check_eq!`] macros: assertion
//!   failures as values instead of panics, so test bodies compose with `?`
//!   and the retry wrapper.

mod error;
mod failure;
mod logging;
mod report;
mod session;

pub use error::{HarnessError, Result};
pub use failure::TestFailure;
pub use logging::init_logging;
pub use report::{Outcome, ReportWriter, RunSummary, TestRecord};
pub use session::TestSession;
