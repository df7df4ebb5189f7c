//! HTTP layer for the restcheck harness.
//!
//! Two pieces live here:
//!
//! - [`HttpClient`]: a thin wrapper over a pooled blocking reqwest session
//!   exposing verb methods with a uniform timeout.
//! - [`SwapiClient`]: the domain client that maps semantic operations
//!   ("get film by id") onto fixed path templates.
//!
//! Failures at this layer are raised faults only: connect errors and
//! timeouts. HTTP statuses are data, not errors, and flow back in
//! [`ApiResponse`] for the test bodies (or the retry wrapper above them) to
//! judge.

mod client;
mod error;
mod response;
mod swapi;

pub use client::{Headers, HttpClient, Params};
pub use error::{HttpError, Result};
pub use response::ApiResponse;
pub use swapi::SwapiClient;
