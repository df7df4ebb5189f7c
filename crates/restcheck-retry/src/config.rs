use crate::backoff::{ExponentialBackoff, FixedInterval, IntervalFunction};
use crate::events::RetryEvent;
use crate::policy::{RetryPolicy, RetryPredicate};
use restcheck_config::Settings;
use restcheck_core::events::EventListeners;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the retry wrapper.
pub struct RetryConfig<E> {
    pub(crate) policy: RetryPolicy<E>,
    pub(crate) event_listeners: EventListeners<RetryEvent>,
    pub(crate) name: String,
}

impl<E> RetryConfig<E> {
    /// Creates a new builder with the documented defaults.
    pub fn builder() -> RetryConfigBuilder<E> {
        RetryConfigBuilder::new()
    }

    /// Creates a builder seeded from the configuration provider.
    pub fn from_settings(settings: &Settings) -> RetryConfigBuilder<E> {
        RetryConfigBuilder::from_settings(settings)
    }

    /// The policy this configuration was built with.
    pub fn policy(&self) -> &RetryPolicy<E> {
        &self.policy
    }

    /// The name used in events and log records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wraps this configuration into an executable [`Retry`](crate::Retry).
    pub fn wrap(self) -> crate::Retry<E> {
        crate::Retry::new(self)
    }
}

/// Builder for [`RetryConfig`].
pub struct RetryConfigBuilder<E> {
    max_attempts: usize,
    interval_fn: Option<Arc<dyn IntervalFunction>>,
    retry_predicate: Option<RetryPredicate<E>>,
    event_listeners: EventListeners<RetryEvent>,
    name: String,
}

impl<E> Default for RetryConfigBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RetryConfigBuilder<E> {
    /// Creates a new builder.
    ///
    /// Defaults:
    /// - max_attempts: 3
    /// - backoff: exponential, 1s initial delay, factor 2.0
    /// - name: `"<unnamed>"`
    pub fn new() -> Self {
        Self {
            max_attempts: 3,
            interval_fn: None,
            retry_predicate: None,
            event_listeners: EventListeners::new(),
            name: "<unnamed>".to_string(),
        }
    }

    /// Creates a builder whose attempt budget and backoff schedule come from
    /// the configuration provider. Every value can still be overridden.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new()
            .max_attempts(settings.retry_max_attempts)
            .backoff(
                ExponentialBackoff::new(settings.retry_delay)
                    .multiplier(settings.retry_backoff_factor),
            )
    }

    /// Sets the maximum number of attempts.
    ///
    /// This includes the initial attempt, so max_attempts=3 means
    /// 1 initial attempt + 2 retries. A value of 1 disables retrying.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets a fixed backoff interval.
    pub fn fixed_backoff(mut self, duration: Duration) -> Self {
        self.interval_fn = Some(Arc::new(FixedInterval::new(duration)));
        self
    }

    /// Sets exponential backoff with the default factor of 2.0.
    pub fn exponential_backoff(mut self, initial_delay: Duration) -> Self {
        self.interval_fn = Some(Arc::new(ExponentialBackoff::new(initial_delay)));
        self
    }

    /// Sets a custom interval function for backoff.
    pub fn backoff<I>(mut self, interval_fn: I) -> Self
    where
        I: IntervalFunction + 'static,
    {
        self.interval_fn = Some(Arc::new(interval_fn));
        self
    }

    /// Sets a predicate to determine which failures should be retried.
    ///
    /// Without a predicate every failure kind is retryable, including plain
    /// assertion failures. That is the documented default for the flaky-test
    /// use case, at the cost of potentially masking genuine bugs behind
    /// retries.
    pub fn retry_on<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.retry_predicate = Some(Arc::new(predicate));
        self
    }

    /// Sets the name for this retry instance (used in events and log records).
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Registers a callback invoked after a failed attempt, before the delay.
    ///
    /// The callback receives the attempt that just failed (1-based) and the
    /// wait before the next attempt.
    pub fn on_retry<F>(mut self, f: F) -> Self
    where
        F: Fn(usize, Duration) + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &RetryEvent| {
            if let RetryEvent::Retry { attempt, delay, .. } = event {
                f(*attempt, *delay);
            }
        });
        self
    }

    /// Registers a callback invoked when the wrapped body succeeds.
    ///
    /// The callback receives the total number of attempts made; 1 means
    /// success on the first try.
    pub fn on_success<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &RetryEvent| {
            if let RetryEvent::Success { attempts, .. } = event {
                f(*attempts);
            }
        });
        self
    }

    /// Registers a callback invoked when all attempts are exhausted.
    ///
    /// The callback receives the total number of attempts made, which equals
    /// the configured max_attempts. The last failure still propagates to the
    /// caller after the callback runs.
    pub fn on_exhausted<F>(mut self, f: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &RetryEvent| {
            if let RetryEvent::Exhausted { attempts, .. } = event {
                f(*attempts);
            }
        });
        self
    }

    /// Registers a callback invoked when a failure is not retried because the
    /// predicate rejected it. The failure propagates immediately.
    pub fn on_ignored_error<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.event_listeners.add(move |event: &RetryEvent| {
            if matches!(event, RetryEvent::IgnoredError { .. }) {
                f();
            }
        });
        self
    }

    /// Builds the retry configuration.
    pub fn build(self) -> RetryConfig<E> {
        let interval_fn = self
            .interval_fn
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::new(Duration::from_secs(1))));

        let mut policy = RetryPolicy::new(self.max_attempts, interval_fn);
        if let Some(predicate) = self.retry_predicate {
            policy.retry_predicate = Some(predicate);
        }

        RetryConfig {
            policy,
            event_listeners: self.event_listeners,
            name: self.name,
        }
    }
}
