//! Test session lifecycle: per-test timing, log records, and report entries.

use std::path::Path;
use std::time::Instant;

use chrono::Local;

use crate::error::Result;
use crate::failure::TestFailure;
use crate::logging::banner;
use crate::report::{Outcome, ReportWriter, RunSummary, TestRecord};

const RULE: &str = "----------------------------------------------------------------------------------------------------";

/// Orchestrates one test run: executes bodies, logs start/finish, records
/// outcomes, and produces the run summary.
///
/// The session performs no policy decisions of its own; retrying happens
/// inside the test body (via the retry wrapper) before the outcome reaches
/// the session.
#[derive(Debug)]
pub struct TestSession {
    report: ReportWriter,
    summary: RunSummary,
}

impl TestSession {
    /// Starts a session writing records into `report_dir`.
    pub fn start(report_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            report: ReportWriter::new(report_dir.as_ref())?,
            summary: RunSummary::default(),
        })
    }

    /// The report writer for this session.
    pub fn report(&self) -> &ReportWriter {
        &self.report
    }

    /// The running tally.
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Runs one test body, recording its outcome.
    ///
    /// A failed body is recorded with its full failure text attached; the
    /// outcome is returned so callers can branch on it, but the failure
    /// itself terminates here and the run continues with the next test.
    pub fn run_test<F>(&mut self, name: &str, body: F) -> Result<Outcome>
    where
        F: FnOnce() -> std::result::Result<(), TestFailure>,
    {
        tracing::info!("TEST STARTED: {name}");
        let start = Instant::now();
        let result = body();
        let duration = start.elapsed();
        tracing::info!(
            "TEST FINISHED: {name} | duration: {:.2}s",
            duration.as_secs_f64()
        );
        tracing::info!("{RULE}");

        let (outcome, record) = match result {
            Ok(()) => (
                Outcome::Passed,
                TestRecord::new(name, Outcome::Passed, duration),
            ),
            Err(failure) => {
                tracing::error!("TEST FAILED: {name}: {failure}");
                (
                    Outcome::Failed,
                    TestRecord::new(name, Outcome::Failed, duration)
                        .with_failure(failure.to_string()),
                )
            }
        };

        self.report.record(&record)?;
        self.summary.tally(outcome);
        Ok(outcome)
    }

    /// Records a skipped test without running anything.
    pub fn skip_test(&mut self, name: &str, reason: &str) -> Result<()> {
        tracing::info!("TEST SKIPPED: {name} ({reason})");
        let record = TestRecord::new(name, Outcome::Skipped, std::time::Duration::ZERO);
        self.report.record(&record)?;
        self.summary.tally(Outcome::Skipped);
        Ok(())
    }

    /// Finishes the session: logs the summary banner, writes `summary.json`,
    /// and returns the tally. `RunSummary::is_success` maps to the host
    /// runner's zero/non-zero exit convention.
    pub fn finish(self) -> Result<RunSummary> {
        tracing::info!("{}", banner());
        tracing::info!(
            "TEST RUN FINISHED: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        tracing::info!(
            "Total: {} | Passed: {} | Failed: {} | Skipped: {}",
            self.summary.total,
            self.summary.passed,
            self.summary.failed,
            self.summary.skipped
        );
        tracing::info!("{}", banner());

        self.report.write_summary(&self.summary)?;
        Ok(self.summary)
    }
}
