use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};

const BASE_URL_VAR: &str = "SWAPI_BASE_URL";
const TIMEOUT_VAR: &str = "API_TIMEOUT";
const MAX_ATTEMPTS_VAR: &str = "RETRY_MAX_ATTEMPTS";
const DELAY_VAR: &str = "RETRY_DELAY";
const BACKOFF_FACTOR_VAR: &str = "RETRY_BACKOFF_FACTOR";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_ATTEMPTS: usize = 3;
const DEFAULT_DELAY_SECS: f64 = 1.0;
const DEFAULT_BACKOFF_FACTOR: f64 = 2.0;

/// Log verbosity, parsed from `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Returns the level as the string `tracing` filters understand.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "expected one of ERROR, WARN, INFO, DEBUG, TRACE; got {s:?}"
            )),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Immutable harness settings, read once from the environment.
///
/// | Variable | Default | Constraint |
/// |---|---|---|
/// | `SWAPI_BASE_URL` | `https://swapi.dev/api` | non-empty |
/// | `API_TIMEOUT` | `30` | integer seconds, >= 1 |
/// | `RETRY_MAX_ATTEMPTS` | `3` | integer, >= 1 |
/// | `RETRY_DELAY` | `1.0` | float seconds, >= 0 |
/// | `RETRY_BACKOFF_FACTOR` | `2.0` | float, >= 1 |
/// | `LOG_LEVEL` | `INFO` | ERROR/WARN/INFO/DEBUG/TRACE |
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root URL of the API under test.
    pub base_url: String,
    /// Per-request timeout applied uniformly to every HTTP call.
    pub api_timeout: Duration,
    /// Default maximum attempts for the retry wrapper (includes the first).
    pub retry_max_attempts: usize,
    /// Default delay before the first retry.
    pub retry_delay: Duration,
    /// Default multiplier applied to the delay after each failed attempt.
    pub retry_backoff_factor: f64,
    /// Log verbosity for the run log.
    pub log_level: LogLevel,
}

impl Settings {
    /// Loads settings from a `.env` file (if present) and the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        // Missing .env is fine; a malformed one is not worth failing the run
        // over either, since the process environment is authoritative.
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Loads settings from the given env file and the process environment.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let _ = dotenvy::from_path(path.as_ref());
        Self::from_process_env()
    }

    /// Loads settings from the process environment only.
    pub fn from_process_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(ConfigError::OutOfRange {
                var: BASE_URL_VAR,
                value: base_url,
                constraint: "must be non-empty",
            });
        }

        let timeout_secs: u64 = parse_var(TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::OutOfRange {
                var: TIMEOUT_VAR,
                value: timeout_secs.to_string(),
                constraint: "must be >= 1 second",
            });
        }

        let retry_max_attempts: usize = parse_var(MAX_ATTEMPTS_VAR, DEFAULT_MAX_ATTEMPTS)?;
        if retry_max_attempts == 0 {
            return Err(ConfigError::OutOfRange {
                var: MAX_ATTEMPTS_VAR,
                value: retry_max_attempts.to_string(),
                constraint: "must be >= 1",
            });
        }

        let delay_secs: f64 = parse_var(DELAY_VAR, DEFAULT_DELAY_SECS)?;
        if !delay_secs.is_finite() || delay_secs < 0.0 {
            return Err(ConfigError::OutOfRange {
                var: DELAY_VAR,
                value: delay_secs.to_string(),
                constraint: "must be a finite value >= 0",
            });
        }

        let retry_backoff_factor: f64 = parse_var(BACKOFF_FACTOR_VAR, DEFAULT_BACKOFF_FACTOR)?;
        if !retry_backoff_factor.is_finite() || retry_backoff_factor < 1.0 {
            return Err(ConfigError::OutOfRange {
                var: BACKOFF_FACTOR_VAR,
                value: retry_backoff_factor.to_string(),
                constraint: "must be a finite value >= 1",
            });
        }

        let log_level = match env::var(LOG_LEVEL_VAR) {
            Ok(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                var: LOG_LEVEL_VAR,
                value: raw,
                reason,
            })?,
            Err(_) => LogLevel::default(),
        };

        let settings = Self {
            base_url,
            api_timeout: Duration::from_secs(timeout_secs),
            retry_max_attempts,
            retry_delay: Duration::from_secs_f64(delay_secs),
            retry_backoff_factor,
            log_level,
        };
        tracing::debug!(?settings, "loaded harness settings");
        Ok(settings)
    }
}

impl Default for Settings {
    /// The documented defaults, without touching the environment.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: Duration::from_secs_f64(DEFAULT_DELAY_SECS),
            retry_backoff_factor: DEFAULT_BACKOFF_FACTOR,
            log_level: LogLevel::default(),
        }
    }
}

fn parse_var<T>(var: &'static str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
