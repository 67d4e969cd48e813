//! Bounded retry with exponential backoff and jitter
//!
//! [`RetryPolicy`] is the sole retry point in the crate: repositories
//! wrap their catalog calls in it, while the paginator and the HTTP
//! client never retry on their own. Whether a failure is worth
//! replaying comes from [`Error::is_retryable`] or a caller-supplied
//! classifier.

use crate::error::{Error, Result};
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Retry configuration: attempt budget plus backoff curve.
///
/// `max_retries` counts retries after the initial attempt, so the
/// default of 2 allows up to 3 attempts in total.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each retry
    pub backoff_factor: f64,
    /// Uniform jitter window applied to every sleep, in both directions
    pub jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(500),
            backoff_factor: 2.0,
            jitter: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with the given retry budget and default backoff
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Policy that never retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Set the initial delay
    #[must_use]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the backoff multiplier
    #[must_use]
    pub fn with_backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor;
        self
    }

    /// Set the jitter window
    #[must_use]
    pub fn with_jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Execute `operation`, retrying failures that
    /// [`Error::is_retryable`] classifies as transient.
    pub async fn execute<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.execute_if(Error::is_retryable, operation).await
    }

    /// Execute `operation` with a caller-supplied retry classifier.
    ///
    /// The operation is attempted once, then retried while the failure
    /// is classified retryable and the retry budget lasts. Between
    /// attempts the task sleeps for the current delay plus a uniform
    /// random offset in `[-jitter, +jitter]`, clamped at zero; the
    /// delay is then multiplied by the backoff factor.
    pub async fn execute_if<T, F, Fut, P>(&self, should_retry: P, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
        P: Fn(&Error) -> bool,
    {
        let mut attempt = 0u32;
        let mut delay = self.initial_delay;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > self.max_retries || !should_retry(&err) {
                        return Err(err);
                    }
                    let sleep = jittered(delay, self.jitter);
                    debug!(
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = sleep.as_millis() as u64,
                        error = %err,
                        "retrying after transient failure"
                    );
                    tokio::time::sleep(sleep).await;
                    delay = delay.mul_f64(self.backoff_factor);
                }
            }
        }
    }
}

/// Apply a uniform random offset in `[-jitter, +jitter]`, clamped at zero
fn jittered(delay: Duration, jitter: Duration) -> Duration {
    if jitter.is_zero() {
        return delay;
    }
    let window = jitter.as_secs_f64();
    let offset = rand::rng().random_range(-window..=window);
    Duration::from_secs_f64((delay.as_secs_f64() + offset).max(0.0))
}
