//! Backoff interval strategies.

use rand::Rng;
use std::time::Duration;

/// Computes the wait between attempts.
///
/// `attempt` counts failed attempts so far, starting at 0: the wait after the
/// first failure is `interval(0)`, after the second `interval(1)`, and so on.
pub trait IntervalFunction: Send + Sync {
    /// Returns the delay to wait before the next attempt.
    fn interval(&self, attempt: usize) -> Duration;
}

/// A constant delay between attempts.
#[derive(Debug, Clone)]
pub struct FixedInterval {
    duration: Duration,
}

impl FixedInterval {
    /// Creates a fixed interval with the given duration.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl IntervalFunction for FixedInterval {
    fn interval(&self, _attempt: usize) -> Duration {
        self.duration
    }
}

/// Exponentially growing delay: `initial × multiplier^attempt`.
///
/// A multiplier of 1.0 degenerates to a fixed interval. The delay sequence is
/// monotonically non-decreasing for any multiplier >= 1.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    initial: Duration,
    multiplier: f64,
    max_interval: Option<Duration>,
}

impl ExponentialBackoff {
    /// Creates an exponential backoff with a multiplier of 2.0 and no cap.
    pub fn new(initial: Duration) -> Self {
        Self {
            initial,
            multiplier: 2.0,
            max_interval: None,
        }
    }

    /// Sets the multiplier applied after each failed attempt.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Caps the delay at the given maximum.
    pub fn max_interval(mut self, max: Duration) -> Self {
        self.max_interval = Some(max);
        self
    }

    fn base_interval(&self, attempt: usize) -> Duration {
        let scaled = self.initial.mul_f64(self.multiplier.powi(attempt as i32));
        match self.max_interval {
            Some(max) => scaled.min(max),
            None => scaled,
        }
    }
}

impl IntervalFunction for ExponentialBackoff {
    fn interval(&self, attempt: usize) -> Duration {
        self.base_interval(attempt)
    }
}

/// Exponential backoff with randomized jitter.
///
/// Each delay is drawn uniformly from
/// `[base × (1 - factor), base × (1 + factor)]` where `base` follows the
/// plain exponential schedule.
#[derive(Debug, Clone)]
pub struct ExponentialRandomBackoff {
    inner: ExponentialBackoff,
    randomization_factor: f64,
}

impl ExponentialRandomBackoff {
    /// Creates a randomized exponential backoff.
    ///
    /// `randomization_factor` is clamped to `[0, 1]`.
    pub fn new(initial: Duration, randomization_factor: f64) -> Self {
        Self {
            inner: ExponentialBackoff::new(initial),
            randomization_factor: randomization_factor.clamp(0.0, 1.0),
        }
    }

    /// Sets the multiplier applied after each failed attempt.
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.inner = self.inner.multiplier(multiplier);
        self
    }

    /// Caps the delay (after jitter) at the given maximum.
    pub fn max_interval(mut self, max: Duration) -> Self {
        self.inner = self.inner.max_interval(max);
        self
    }
}

impl IntervalFunction for ExponentialRandomBackoff {
    fn interval(&self, attempt: usize) -> Duration {
        let base = self.inner.base_interval(attempt);
        if self.randomization_factor == 0.0 || base.is_zero() {
            return base;
        }
        let low = 1.0 - self.randomization_factor;
        let high = 1.0 + self.randomization_factor;
        let jitter: f64 = rand::rng().random_range(low..=high);
        let jittered = base.mul_f64(jitter);
        match self.inner.max_interval {
            Some(max) => jittered.min(max),
            None => jittered,
        }
    }
}

/// A custom function-based interval.
pub struct FnInterval<F>
where
    F: Fn(usize) -> Duration + Send + Sync,
{
    f: F,
}

impl<F> FnInterval<F>
where
    F: Fn(usize) -> Duration + Send + Sync,
{
    /// Creates an interval function from a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> IntervalFunction for FnInterval<F>
where
    F: Fn(usize) -> Duration + Send + Sync,
{
    fn interval(&self, attempt: usize) -> Duration {
        (self.f)(attempt)
    }
}
