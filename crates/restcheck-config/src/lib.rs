//! Typed, environment-sourced configuration for the restcheck harness.
//!
//! Settings are read once at process start and are immutable afterwards. The
//! resulting [`Settings`] value is passed by reference into each component's
//! constructor; nothing in the harness reads the environment after
//! construction, which keeps the retry wrapper and the HTTP client testable
//! with injected values.
//!
//! Every variable has a documented default; malformed values fail fast with a
//! [`ConfigError`] naming the variable and the violated constraint.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{LogLevel, Settings};
