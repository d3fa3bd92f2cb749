//! Retry policy
//!
//! Decides whether a failed provider call is attempted again and how long to
//! wait before doing so.
//!
//! A failure is retried while attempts remain and either:
//!
//! - the provider flagged it retryable, its status is not 403 and its code is
//!   not `CredentialsError`, or
//! - its status is 429, regardless of the retryable flag.
//!
//! Failures normalized as terminal (missing credentials) are never retried.
//!
//! The delay is `base + jitter` with jitter drawn uniformly from
//! `[jitter_min, jitter_max)`. With the defaults that is 4 to 7 seconds.

use std::future::Future;
use std::time::Duration;

use cloudcall_domain::ProviderError;
use cloudcall_domain::constants::{
    CREDENTIALS_ERROR_CODE, STATUS_FORBIDDEN, STATUS_TOO_MANY_REQUESTS,
};
use cloudcall_domain::error::Result;
use tracing::{debug, warn};

use crate::constants::{
    DEFAULT_BASE_BACKOFF_MS, DEFAULT_JITTER_MAX_MS, DEFAULT_JITTER_MIN_MS, DEFAULT_MAX_RETRIES,
};

/// Retry limits and backoff window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Base delay before each retry
    pub base_backoff: Duration,
    /// Lower jitter bound in milliseconds, may be negative
    pub jitter_min_ms: i64,
    /// Upper jitter bound in milliseconds, exclusive
    pub jitter_max_ms: i64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            base_backoff: Duration::from_millis(DEFAULT_BASE_BACKOFF_MS),
            jitter_min_ms: DEFAULT_JITTER_MIN_MS,
            jitter_max_ms: DEFAULT_JITTER_MAX_MS,
        }
    }
}

impl RetryPolicy {
    /// Policy with the default backoff window and a custom retry count
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Whether a failure seen on `attempt` (0-based) should be retried
    pub fn should_retry(&self, attempt: u32, error: &ProviderError) -> bool {
        if attempt >= self.max_retries || error.terminal {
            return false;
        }
        let status = error.status_code;
        if status == Some(STATUS_TOO_MANY_REQUESTS) {
            return true;
        }
        error.retryable
            && status != Some(STATUS_FORBIDDEN)
            && error.code.as_deref() != Some(CREDENTIALS_ERROR_CODE)
    }

    /// Delay for a jitter sample `unit` in `[0, 1)`
    pub fn backoff_for(&self, unit: f64) -> Duration {
        let span = self.jitter_max_ms.saturating_sub(self.jitter_min_ms).max(0) as f64;
        let jitter = self.jitter_min_ms as f64 + unit.clamp(0.0, 1.0) * span;
        let total_ms = self.base_backoff.as_millis() as f64 + jitter;
        Duration::from_millis(total_ms.max(0.0) as u64)
    }

    /// Delay before the next retry, with fresh jitter
    pub fn next_backoff(&self) -> Duration {
        self.backoff_for(rand::random::<f64>())
    }

    /// Run `operation` until it succeeds or the policy gives up
    ///
    /// `operation` receives the 0-based attempt number. Errors that carry no
    /// provider failure (configuration, construction) are returned at once.
    pub async fn run<T, F, Fut>(&self, label: &str, mut operation: F) -> Result<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            let err = match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            let retry = err
                .provider_error()
                .is_some_and(|provider_error| self.should_retry(attempt, provider_error));
            if !retry {
                debug!(
                    call = %label,
                    attempts = attempt + 1,
                    error = %err,
                    "Request failed without retry"
                );
                return Err(err);
            }

            attempt += 1;
            let delay = self.next_backoff();
            warn!(
                call = %label,
                "Recoverable error occurred ({}), sleeping for ~{} seconds. Try {} of {}",
                err,
                (delay.as_millis() as f64 / 1000.0).round() as u64,
                attempt,
                self.max_retries
            );
            tokio::time::sleep(delay).await;
        }
    }
}
