//! Service client resolution
//!
//! Builds service clients on demand and keeps them for the lifetime of the
//! resolver. Clients are keyed by the canonical descriptor plus the method, so
//! two descriptors with the same content in a different field order share one
//! client while different methods on the same service get their own (the
//! storage accelerate flag depends on the method).

use std::sync::Arc;

use cloudcall_domain::error::{Error, Result};
use cloudcall_domain::{ClientOptions, ServiceDescriptor, SharedServiceClient, TransportSettings};
use moka::future::Cache;
use tracing::debug;

use crate::constants::CACHE_KEY_SEPARATOR;
use crate::ports::registry::ServiceRegistry;

/// Lazily constructed, process-lifetime client cache
#[derive(Clone)]
pub struct ServiceClientResolver {
    registry: Arc<ServiceRegistry>,
    transport: Arc<TransportSettings>,
    clients: Cache<String, SharedServiceClient>,
}

impl ServiceClientResolver {
    /// Create a resolver over `registry` using `transport` for every client
    pub fn new(registry: Arc<ServiceRegistry>, transport: TransportSettings) -> Self {
        Self {
            registry,
            transport: Arc::new(transport),
            clients: Cache::builder().build(),
        }
    }

    /// Registry the resolver constructs clients from
    pub fn registry(&self) -> &ServiceRegistry {
        &self.registry
    }

    /// Transport settings handed to constructors
    pub fn transport(&self) -> &TransportSettings {
        &self.transport
    }

    /// Cache key for a client: canonical descriptor, separator, method
    pub fn cache_key(descriptor: &ServiceDescriptor, method: &str) -> String {
        format!(
            "{}{}{}",
            descriptor.canonical_key(),
            CACHE_KEY_SEPARATOR,
            method
        )
    }

    /// Return the cached client for this call, constructing it on first use
    ///
    /// Concurrent first uses of the same key construct the client once.
    /// Construction failures are not cached.
    pub async fn resolve(
        &self,
        descriptor: &ServiceDescriptor,
        method: &str,
    ) -> Result<SharedServiceClient> {
        let options = ClientOptions::for_call(descriptor, method)?;
        let key = Self::cache_key(descriptor, method);
        let registry = Arc::clone(&self.registry);
        let transport = Arc::clone(&self.transport);
        let service = descriptor.name.clone();

        self.clients
            .try_get_with(key, async move {
                debug!(
                    service = %service,
                    region = %options.region,
                    accelerate = ?options.use_accelerate_endpoint,
                    "Constructing service client"
                );
                registry.construct(&service, &options, &transport)
            })
            .await
            .map_err(|e: Arc<Error>| (*e).clone())
    }

    /// Number of cached clients
    pub async fn cached_clients(&self) -> u64 {
        self.clients.run_pending_tasks().await;
        self.clients.entry_count()
    }
}

impl std::fmt::Debug for ServiceClientResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClientResolver")
            .field("registry", &self.registry)
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
