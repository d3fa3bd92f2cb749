//! Request dispatcher configuration types

use std::time::Duration;

use cloudcall_application::RetryPolicy;
use cloudcall_application::constants::{
    DEFAULT_BASE_BACKOFF_MS, DEFAULT_CONCURRENCY, DEFAULT_JITTER_MAX_MS, DEFAULT_JITTER_MIN_MS,
    DEFAULT_MAX_RETRIES,
};
use cloudcall_domain::constants::DEFAULT_REGION;
use serde::{Deserialize, Serialize};

/// Retry, backoff and concurrency settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Retries after the first attempt
    pub max_retries: u32,

    /// Provider calls allowed to run at once
    pub concurrency: usize,

    /// Base delay before a retry (milliseconds)
    pub base_backoff_ms: u64,

    /// Lower jitter bound (milliseconds, may be negative)
    pub jitter_min_ms: i64,

    /// Upper jitter bound (milliseconds, exclusive)
    pub jitter_max_ms: i64,

    /// Region used by the CLI when none is given
    pub default_region: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            concurrency: DEFAULT_CONCURRENCY,
            base_backoff_ms: DEFAULT_BASE_BACKOFF_MS,
            jitter_min_ms: DEFAULT_JITTER_MIN_MS,
            jitter_max_ms: DEFAULT_JITTER_MAX_MS,
            default_region: DEFAULT_REGION.to_string(),
        }
    }
}

impl RequestConfig {
    /// Retry policy described by this configuration
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_backoff: Duration::from_millis(self.base_backoff_ms),
            jitter_min_ms: self.jitter_min_ms,
            jitter_max_ms: self.jitter_max_ms,
        }
    }
}
