//! Domain Value Objects
//!
//! Immutable value objects describing a provider call and its outcome.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceDescriptor`] | Service name plus credentials/region/flags bag |
//! | [`ClientOptions`] | Parameters a service client is built with |
//! | [`TransportSettings`] | Proxy, CA and timeout shared by all clients |
//! | [`RawProviderError`] | Failure shape reported by a service client |
//! | [`ProviderError`] | Normalized failure used for retry decisions |

/// Canonical JSON serialization
pub mod canonical;
/// Client construction options
pub mod client_options;
/// Service descriptor
pub mod descriptor;
/// Provider failure records
pub mod provider_error;

pub use canonical::{canonical_json, is_truthy};
pub use client_options::{ClientOptions, DEFAULT_REQUEST_TIMEOUT, TransportSettings};
pub use descriptor::ServiceDescriptor;
pub use provider_error::{ProviderError, RawProviderError};
