//! Service Client Port
//!
//! A service client is bound to one set of [`ClientOptions`] and dispatches
//! method calls against a provider API surface. Clients are expensive to build
//! and are shared between every call with an equivalent descriptor, so
//! implementations must be `Send + Sync`.
//!
//! [`ClientOptions`]: crate::value_objects::ClientOptions

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::value_objects::RawProviderError;

/// Provider API surface
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use cloudcall_domain::{RawProviderError, ServiceClient};
/// use serde_json::{Value, json};
///
/// struct EchoClient;
///
/// #[async_trait]
/// impl ServiceClient for EchoClient {
///     fn service_name(&self) -> &str {
///         "Echo"
///     }
///
///     async fn call(&self, method: &str, params: &Value) -> Result<Value, RawProviderError> {
///         Ok(json!({ "method": method, "params": params }))
///     }
/// }
/// ```
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Name of the service this client talks to
    fn service_name(&self) -> &str;

    /// Invoke `method` with `params`
    ///
    /// Failures are reported un-normalized; classification happens in the
    /// dispatcher.
    async fn call(&self, method: &str, params: &Value) -> Result<Value, RawProviderError>;
}

/// Shared service client handle
pub type SharedServiceClient = Arc<dyn ServiceClient>;
