//! Service descriptor value object
//!
//! Identifies a target API surface: a service name, possibly dotted to address
//! a sub-client (`DynamoDB.DocumentClient`), plus a free-form parameter bag
//! carrying credentials, region, feature flags and caller metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    ACCELERATED_METHODS, MISSING_CREDENTIALS_MESSAGE, PARAM_CREDENTIALS, PARAM_REGION,
    PARAM_TRANSFER_ACCELERATION, STORAGE_SERVICE_NAME,
};
use crate::error::{Error, Result};
use crate::value_objects::canonical::{canonical_json, is_truthy};

/// Logical identifier and parameters for a provider service
///
/// # Example
///
/// ```
/// use cloudcall_domain::ServiceDescriptor;
/// use serde_json::json;
///
/// let descriptor = ServiceDescriptor::new("CloudFormation")
///     .with_credentials(json!({"accessKeyId": "AKIA..."}))
///     .with_region("eu-west-1");
///
/// assert_eq!(descriptor.region(), Some("eu-west-1"));
/// assert!(descriptor.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name as registered with the service registry
    pub name: String,
    /// Parameter bag (credentials, region, flags, metadata)
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ServiceDescriptor {
    /// Create a descriptor with an empty parameter bag
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            params: Map::new(),
        }
    }

    /// Set the credentials object
    pub fn with_credentials(self, credentials: Value) -> Self {
        self.with_param(PARAM_CREDENTIALS, credentials)
    }

    /// Set the region
    pub fn with_region<S: Into<String>>(self, region: S) -> Self {
        self.with_param(PARAM_REGION, Value::String(region.into()))
    }

    /// Enable or disable S3 transfer acceleration
    pub fn with_transfer_acceleration(self, enabled: bool) -> Self {
        self.with_param(PARAM_TRANSFER_ACCELERATION, Value::Bool(enabled))
    }

    /// Set an arbitrary parameter
    pub fn with_param<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Structured credentials, if present and an object
    pub fn credentials(&self) -> Option<&Map<String, Value>> {
        self.params.get(PARAM_CREDENTIALS).and_then(Value::as_object)
    }

    /// Region, if set to a non-empty string
    pub fn region(&self) -> Option<&str> {
        self.params
            .get(PARAM_REGION)
            .and_then(Value::as_str)
            .filter(|r| !r.is_empty())
    }

    /// Whether the caller asked for transfer acceleration
    pub fn transfer_acceleration_requested(&self) -> bool {
        self.params
            .get(PARAM_TRANSFER_ACCELERATION)
            .is_some_and(is_truthy)
    }

    /// Whether this is the object storage service
    pub fn is_storage_service(&self) -> bool {
        self.name == STORAGE_SERVICE_NAME
    }

    /// Whether `method` on this descriptor goes through the accelerate endpoint
    pub fn uses_accelerate_endpoint(&self, method: &str) -> bool {
        self.is_storage_service()
            && ACCELERATED_METHODS.contains(&method)
            && self.transfer_acceleration_requested()
    }

    /// Check that the descriptor can be used to construct a client
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::configuration("Service name cannot be empty"));
        }
        if self.credentials().is_none() {
            return Err(Error::configuration(MISSING_CREDENTIALS_MESSAGE));
        }
        Ok(())
    }

    /// Order-independent serialization of name and parameters
    pub fn canonical_key(&self) -> String {
        let value = serde_json::json!({
            "name": self.name,
            "params": Value::Object(self.params.clone()),
        });
        canonical_json(&value)
    }
}
