//! Run-log setup: one timestamped file per run, mirrored to stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use restcheck_config::Settings;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{HarnessError, Result};

const BANNER: &str = "====================================================================================================";

/// Initializes process-wide logging.
///
/// Creates `log_dir` if needed, opens a `test_run_YYYYMMDD_HHMMSS.log` file
/// inside it, and installs a global subscriber writing to both the file and
/// stderr at the configured level. Returns the log file path.
///
/// Must be called at most once per process; a second call fails with
/// [`HarnessError::Logging`].
pub fn init_logging(settings: &Settings, log_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = log_dir.as_ref();
    fs::create_dir_all(dir)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("test_run_{stamp}.log"));
    let file = File::create(&path)?;

    let filter = EnvFilter::try_new(settings.log_level.as_str())
        .map_err(|e| HarnessError::Logging(e.to_string()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| HarnessError::Logging(e.to_string()))?;

    tracing::info!("{BANNER}");
    tracing::info!(
        "TEST RUN STARTED: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    tracing::info!("{BANNER}");

    Ok(path)
}

pub(crate) fn banner() -> &'static str {
    BANNER
}
