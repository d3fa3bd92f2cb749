//! Application constants
//!
//! Defaults for the request dispatcher. All of them can be overridden through
//! `cloudcall-infrastructure` configuration.

/// Maximum number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Base delay before a retry, in milliseconds
pub const DEFAULT_BASE_BACKOFF_MS: u64 = 5000;

/// Lower bound of the jitter added to the base delay, in milliseconds
pub const DEFAULT_JITTER_MIN_MS: i64 = -1000;

/// Upper bound (exclusive) of the jitter added to the base delay, in milliseconds
pub const DEFAULT_JITTER_MAX_MS: i64 = 2000;

/// Number of provider calls allowed to execute at the same time
pub const DEFAULT_CONCURRENCY: usize = 2;

/// Separator between the parts of a cache key
pub const CACHE_KEY_SEPARATOR: &str = "|";
