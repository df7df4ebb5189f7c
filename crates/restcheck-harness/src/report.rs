//! Machine-readable run reports.
//!
//! One pretty-printed JSON file per test plus a `summary.json` per run. On
//! failure the full failure text is attached to the test's record so the
//! report alone is enough to diagnose the run.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Terminal outcome of one test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed,
    Skipped,
}

/// The report record for one executed test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    /// Test name as reported in the log.
    pub name: String,
    /// Terminal outcome.
    pub outcome: Outcome,
    /// Wall-clock duration in seconds.
    pub duration_secs: f64,
    /// Full failure text, present only for failed tests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    /// When the test finished.
    pub finished_at: DateTime<Local>,
}

impl TestRecord {
    /// Builds a record for a finished test.
    pub fn new(name: impl Into<String>, outcome: Outcome, duration: Duration) -> Self {
        Self {
            name: name.into(),
            outcome,
            duration_secs: duration.as_secs_f64(),
            failure: None,
            finished_at: Local::now(),
        }
    }

    /// Attaches the full failure text to this record.
    pub fn with_failure(mut self, failure: impl Into<String>) -> Self {
        self.failure = Some(failure.into());
        self
    }
}

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    /// Tallies one outcome.
    pub fn tally(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }

    /// Whether the run should map to a zero exit status.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Writes report records into a per-run directory.
#[derive(Debug)]
pub struct ReportWriter {
    dir: PathBuf,
    sequence: AtomicUsize,
}

impl ReportWriter {
    /// Creates the report directory (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            sequence: AtomicUsize::new(1),
        })
    }

    /// The report directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes one test record, returning the path written.
    pub fn record(&self, record: &TestRecord) -> Result<PathBuf> {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let path = self
            .dir
            .join(format!("{seq:03}-{}.json", sanitize(&record.name)));
        fs::write(&path, serde_json::to_vec_pretty(record)?)?;
        Ok(path)
    }

    /// Writes the run summary as `summary.json`, returning the path written.
    pub fn write_summary(&self, summary: &RunSummary) -> Result<PathBuf> {
        let path = self.dir.join("summary.json");
        fs::write(&path, serde_json::to_vec_pretty(summary)?)?;
        Ok(path)
    }
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
