//! Event plumbing shared by the harness instruments.
//!
//! An instrument (the retry wrapper today) emits events describing its
//! failure-policy decisions. Callers observe them by registering closures;
//! observation is strictly a side channel and can never change the outcome of
//! the instrumented operation, so a panicking listener is isolated rather
//! than propagated.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

/// An event emitted by a harness instrument.
pub trait HarnessEvent: Send + Sync + fmt::Debug {
    /// Stable identifier for the event kind (e.g. "retry", "exhausted").
    fn event_type(&self) -> &'static str;

    /// When the event occurred.
    fn timestamp(&self) -> Instant;

    /// Name of the instrument instance that emitted the event.
    fn source(&self) -> &str;
}

/// Registered listener closures for one event type.
///
/// Instruments register closures at build time and call [`emit`] at each
/// decision point. Listeners run in registration order; a panic in one is
/// caught so the rest still run.
///
/// [`emit`]: EventListeners::emit
pub struct EventListeners<E> {
    listeners: Vec<Arc<dyn Fn(&E) + Send + Sync>>,
}

impl<E> EventListeners<E> {
    /// An empty listener list.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registers a listener closure.
    pub fn add<F>(&mut self, listener: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Delivers `event` to every listener, isolating panics.
    pub fn emit(&self, event: &E) {
        for listener in &self.listeners {
            let _ = catch_unwind(AssertUnwindSafe(|| listener(event)));
        }
    }

    /// Whether any listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// How many listeners are registered.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl<E> Default for EventListeners<E> {
    fn default() -> Self {
        Self::new()
    }
}
