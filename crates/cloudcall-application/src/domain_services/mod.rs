//! Domain services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`RetryPolicy`] | Retry classification and backoff |
//! | [`RequestQueue`] | Bounded concurrency for provider calls |
//! | [`ServiceClientResolver`] | Cached client construction |
//! | [`MemoCache`] | Shared in-flight and settled results |
//! | [`normalize_provider_error`] | Raw provider failure to domain error |

/// Cached client construction
pub mod client_resolver;
/// Memoized requests
pub mod memo;
/// Provider error normalization
pub mod provider_errors;
/// Bounded request queue
pub mod queue;
/// Retry policy
pub mod retry;

pub use client_resolver::ServiceClientResolver;
pub use memo::{MemoCache, SharedRequest};
pub use provider_errors::{credentials_error_message, normalize_provider_error};
pub use queue::RequestQueue;
pub use retry::RetryPolicy;
