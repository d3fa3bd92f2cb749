//! Service client construction parameters

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DEFAULT_REGION;
use crate::error::{Error, Result};
use crate::value_objects::ServiceDescriptor;

/// Default client-level request timeout (2 minutes)
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(120_000);

/// Parameters a service client is constructed with
///
/// Only credentials, region and (for the storage service) the accelerate
/// flag are carried over from the descriptor. Metadata such as `useCache`
/// never reaches client construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientOptions {
    /// Structured credentials object
    pub credentials: Map<String, Value>,
    /// Accelerate endpoint flag, only set for the storage service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_accelerate_endpoint: Option<bool>,
    /// Target region
    pub region: String,
}

impl ClientOptions {
    /// Derive construction options for `method` on `descriptor`
    pub fn for_call(descriptor: &ServiceDescriptor, method: &str) -> Result<Self> {
        descriptor.validate()?;
        let credentials = descriptor
            .credentials()
            .cloned()
            .ok_or_else(|| Error::internal("validated descriptor lost its credentials"))?;
        let use_accelerate_endpoint = descriptor
            .is_storage_service()
            .then(|| descriptor.uses_accelerate_endpoint(method));

        Ok(Self {
            credentials,
            use_accelerate_endpoint,
            region: descriptor.region().unwrap_or(DEFAULT_REGION).to_string(),
        })
    }

    /// Credential value by key, as a string
    pub fn credential(&self, key: &str) -> Option<&str> {
        self.credentials.get(key).and_then(Value::as_str)
    }
}

/// Process-wide transport settings handed to every client constructor
///
/// Built once at startup from configuration; CA files are already read into
/// PEM strings at this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportSettings {
    /// HTTPS proxy URL
    pub proxy: Option<String>,
    /// Extra trusted root certificates, PEM encoded
    pub ca_certificates: Vec<String>,
    /// Client-level request timeout
    pub timeout: Duration,
    /// Endpoint override for HTTP based clients
    pub endpoint_url: Option<String>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            proxy: None,
            ca_certificates: Vec::new(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            endpoint_url: None,
        }
    }
}
