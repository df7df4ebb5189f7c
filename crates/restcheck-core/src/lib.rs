//! Core infrastructure for restcheck.
//!
//! This crate provides the shared plumbing used across the harness crates:
//! - Event system for observability (attempt/outcome notifications)

pub mod events;

pub use events::{EventListeners, HarnessEvent};
