//! Retry mechanism with exponential backoff

use super::types::RetryConfig;
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Failure classification consumed by [`RetryPolicy`].
pub trait Retryable {
    /// Whether another attempt may succeed where this one failed
    fn is_retryable(&self) -> bool;
}

/// Final result of a retried operation together with the attempts it consumed
#[derive(Debug)]
pub struct RetryOutcome<R, E> {
    pub result: std::result::Result<R, E>,
    pub attempts: u32,
}

/// Retry mechanism with exponential backoff
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Deterministic part of the delay before retry number `retry` (1-based).
    ///
    /// `base * multiplier^(retry - 1)`, capped at `max_delay`.
    pub fn backoff_delay(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let millis =
            self.config.base_delay.as_millis() as f64 * self.config.backoff_multiplier.powi(exponent);
        let capped = millis.min(self.config.max_delay.as_millis() as f64);
        Duration::from_millis(capped.max(0.0) as u64)
    }

    fn jitter(&self) -> Duration {
        let bound = self.config.max_jitter.as_micros() as u64;
        if bound == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(rand::thread_rng().gen_range(0..bound))
    }

    /// Execute `f` until it succeeds, fails with a non-retryable error, or the
    /// attempt budget is spent.
    ///
    /// Backoff suspends only the calling task.
    pub async fn call<F, Fut, R, E>(&self, mut f: F) -> RetryOutcome<R, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = std::result::Result<R, E>>,
        E: Retryable + std::fmt::Display,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match f(attempt).await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!("Retry succeeded on attempt {}", attempt);
                    }
                    return RetryOutcome {
                        result: Ok(result),
                        attempts: attempt,
                    };
                }
                Err(error) => {
                    if !error.is_retryable() {
                        debug!(attempt, "Non-retryable failure: {}", error);
                        return RetryOutcome {
                            result: Err(error),
                            attempts: attempt,
                        };
                    }

                    if attempt >= max_attempts {
                        warn!("Retry failed after {} attempts: {}", attempt, error);
                        return RetryOutcome {
                            result: Err(error),
                            attempts: attempt,
                        };
                    }

                    let delay = self.backoff_delay(attempt) + self.jitter();
                    warn!(
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Transient failure: {}, retrying",
                        error
                    );

                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}
