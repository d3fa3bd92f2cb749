//! Null service client for testing and development
//!
//! Accepts every method and answers with an empty object. No network access.

use async_trait::async_trait;
use cloudcall_application::ports::registry::ServiceProviderEntry;
use cloudcall_domain::{
    ClientOptions, RawProviderError, ServiceClient, SharedServiceClient, TransportSettings,
};
use serde_json::{Map, Value};
use tracing::debug;

/// Null service client
///
/// # Example
///
/// ```rust
/// use cloudcall_providers::service::NullServiceClient;
/// use cloudcall_domain::ServiceClient;
///
/// let client = NullServiceClient::new("us-east-1");
/// assert_eq!(client.service_name(), "Null");
/// ```
#[derive(Debug, Clone)]
pub struct NullServiceClient {
    region: String,
}

impl NullServiceClient {
    /// Create a null client bound to `region`
    pub fn new<S: Into<String>>(region: S) -> Self {
        Self {
            region: region.into(),
        }
    }

    /// Region the client was constructed for
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl ServiceClient for NullServiceClient {
    fn service_name(&self) -> &str {
        "Null"
    }

    async fn call(&self, method: &str, _params: &Value) -> Result<Value, RawProviderError> {
        debug!(method, region = %self.region, "Null service call");
        Ok(Value::Object(Map::new()))
    }
}

fn null_factory(
    options: &ClientOptions,
    _transport: &TransportSettings,
) -> Result<SharedServiceClient, String> {
    Ok(std::sync::Arc::new(NullServiceClient::new(options.region.clone())))
}

#[linkme::distributed_slice(cloudcall_application::ports::registry::SERVICE_PROVIDERS)]
static NULL_SERVICE: ServiceProviderEntry = ServiceProviderEntry {
    name: "Null",
    description: "No-op service answering every method with an empty object",
    factory: null_factory,
};
