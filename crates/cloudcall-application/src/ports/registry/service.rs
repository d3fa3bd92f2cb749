//! Service Provider Registry
//!
//! Maps service names (`S3`, `CloudFormation`, `DynamoDB.DocumentClient`) to
//! client constructors. Providers linked into the binary register themselves
//! through the [`SERVICE_PROVIDERS`] distributed slice; tests and embedders
//! can add constructors programmatically with [`ServiceRegistry::register`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use cloudcall_domain::error::{Error, Result};
use cloudcall_domain::{ClientOptions, SharedServiceClient, TransportSettings};

/// Constructor signature used by linked providers
pub type ServiceFactoryFn =
    fn(&ClientOptions, &TransportSettings) -> std::result::Result<SharedServiceClient, String>;

/// Constructor closure stored in a [`ServiceRegistry`]
pub type ServiceFactory = Arc<
    dyn Fn(&ClientOptions, &TransportSettings) -> std::result::Result<SharedServiceClient, String>
        + Send
        + Sync,
>;

/// Registry entry for linked service providers
///
/// Each provider implementation registers itself with this entry using
/// `#[linkme::distributed_slice(SERVICE_PROVIDERS)]`.
pub struct ServiceProviderEntry {
    /// Service name, dotted for sub-clients (e.g. "DynamoDB.DocumentClient")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a client
    pub factory: ServiceFactoryFn,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static SERVICE_PROVIDERS: [ServiceProviderEntry] = [..];

/// List all linked service providers
///
/// Returns (name, description) tuples. Useful for CLI help.
pub fn list_service_providers() -> Vec<(&'static str, &'static str)> {
    SERVICE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}

struct RegisteredService {
    description: String,
    factory: ServiceFactory,
}

/// Explicit name → constructor map
///
/// Names are validated when registered, so a typo in a provider surfaces at
/// startup instead of on the first request.
#[derive(Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, RegisteredService>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every linked provider
    pub fn from_linked() -> Result<Self> {
        let mut registry = Self::new();
        for entry in SERVICE_PROVIDERS {
            registry.register(entry.name, entry.description, entry.factory)?;
        }
        Ok(registry)
    }

    /// Register a constructor under `name`
    ///
    /// Fails when the name is malformed or already taken.
    pub fn register<N, D, F>(&mut self, name: N, description: D, factory: F) -> Result<()>
    where
        N: Into<String>,
        D: Into<String>,
        F: Fn(&ClientOptions, &TransportSettings) -> std::result::Result<SharedServiceClient, String>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        validate_service_name(&name)?;
        if self.services.contains_key(&name) {
            return Err(Error::configuration(format!(
                "Service '{name}' is already registered"
            )));
        }
        self.services.insert(
            name,
            RegisteredService {
                description: description.into(),
                factory: Arc::new(factory),
            },
        );
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_service<N, F>(mut self, name: N, factory: F) -> Result<Self>
    where
        N: Into<String>,
        F: Fn(&ClientOptions, &TransportSettings) -> std::result::Result<SharedServiceClient, String>
            + Send
            + Sync
            + 'static,
    {
        self.register(name, "", factory)?;
        Ok(self)
    }

    /// Whether a constructor is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }

    /// Registered (name, description) pairs, sorted by name
    pub fn list(&self) -> Vec<(String, String)> {
        self.services
            .iter()
            .map(|(name, s)| (name.clone(), s.description.clone()))
            .collect()
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Construct a client for `name`
    pub fn construct(
        &self,
        name: &str,
        options: &ClientOptions,
        transport: &TransportSettings,
    ) -> Result<SharedServiceClient> {
        let service = self
            .services
            .get(name)
            .ok_or_else(|| Error::unknown_service(name, self.names()))?;
        (service.factory)(options, transport).map_err(|e| Error::client_construction(name, e))
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.services.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn validate_service_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.split('.').all(|segment| {
            !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "Invalid service name '{name}': expected dot-separated alphanumeric segments"
        )))
    }
}
