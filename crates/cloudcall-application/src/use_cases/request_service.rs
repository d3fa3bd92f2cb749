//! Request dispatcher
//!
//! [`RequestService`] is the single entry point for provider calls. A call is
//! validated, bound to a cached client, then run through the retry policy
//! while holding a slot in the request queue.
//!
//! # Example
//!
//! ```
//! # use std::sync::Arc;
//! # use async_trait::async_trait;
//! # use cloudcall_domain::{RawProviderError, ServiceClient, ServiceDescriptor};
//! # use cloudcall_application::{RequestService, ServiceRegistry};
//! # use serde_json::{Value, json};
//! # struct Stacks;
//! # #[async_trait]
//! # impl ServiceClient for Stacks {
//! #     fn service_name(&self) -> &str { "CloudFormation" }
//! #     async fn call(&self, _: &str, _: &Value) -> Result<Value, RawProviderError> {
//! #         Ok(json!({"Stacks": []}))
//! #     }
//! # }
//! # #[tokio::main]
//! # async fn main() -> cloudcall_domain::Result<()> {
//! let registry = ServiceRegistry::new()
//!     .with_service("CloudFormation", |_, _| Ok(Arc::new(Stacks)))?;
//! let requests = RequestService::builder(registry).with_concurrency(2).build();
//!
//! let descriptor = ServiceDescriptor::new("CloudFormation")
//!     .with_credentials(json!({"accessKeyId": "AKIA"}))
//!     .with_region("eu-west-1");
//! let stacks = requests
//!     .invoke(&descriptor, "describeStacks", json!({"StackName": "app-dev"}))
//!     .await?;
//! assert_eq!(stacks, json!({"Stacks": []}));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use cloudcall_domain::error::Result;
use cloudcall_domain::{ServiceDescriptor, TransportSettings};
use futures::FutureExt;
use serde_json::Value;
use tracing::{debug, info, trace};

use crate::constants::DEFAULT_CONCURRENCY;
use crate::domain_services::{
    MemoCache, RequestQueue, RetryPolicy, ServiceClientResolver, normalize_provider_error,
};
use crate::ports::registry::ServiceRegistry;

/// Retrying, concurrency-limited, optionally memoized provider dispatcher
///
/// Cloning is cheap and clones share clients, queue slots and memoized
/// results.
#[derive(Clone, Debug)]
pub struct RequestService {
    resolver: Arc<ServiceClientResolver>,
    queue: RequestQueue,
    retry: RetryPolicy,
    memo: Arc<MemoCache>,
}

impl RequestService {
    /// Start building a dispatcher over `registry`
    pub fn builder(registry: ServiceRegistry) -> RequestServiceBuilder {
        RequestServiceBuilder::new(registry)
    }

    /// Invoke `method` on the service described by `descriptor`
    ///
    /// Fails with a configuration error, without touching the queue, when the
    /// descriptor has no credentials object. Provider failures are retried
    /// according to the retry policy; the last one is returned.
    pub async fn invoke(
        &self,
        descriptor: &ServiceDescriptor,
        method: &str,
        params: Value,
    ) -> Result<Value> {
        descriptor.validate()?;

        if descriptor.uses_accelerate_endpoint(method) {
            info!("Using S3 Transfer Acceleration Endpoint...");
        }

        let client = self.resolver.resolve(descriptor, method).await?;
        let retry = self.retry;
        let label = format!("{}.{}", descriptor.name, method);
        let method = method.to_string();

        let task = async move {
            retry
                .run(&label, |attempt| {
                    let client = Arc::clone(&client);
                    let method = method.clone();
                    let params = params.clone();
                    async move {
                        trace!(method = %method, attempt, "Dispatching provider call");
                        client
                            .call(&method, &params)
                            .await
                            .map_err(normalize_provider_error)
                    }
                })
                .await
        };

        self.queue.submit(task).await
    }

    /// Like [`invoke`](Self::invoke), but equivalent calls share one result
    ///
    /// Calls are equivalent when descriptor, method and parameters are equal
    /// up to key order. Concurrent equivalent calls share the in-flight
    /// request; later ones get the settled outcome, failures included.
    /// Invalid descriptors are rejected before the cache is consulted.
    pub async fn invoke_memoized(
        &self,
        descriptor: &ServiceDescriptor,
        method: &str,
        params: Value,
    ) -> Result<Value> {
        descriptor.validate()?;

        let key = MemoCache::memo_key(descriptor, method, &params);
        let service = self.clone();
        let descriptor = descriptor.clone();
        let method_name = method.to_string();

        let (request, hit) = self.memo.get_or_insert_with(key, move || {
            async move { service.invoke(&descriptor, &method_name, params).await }.boxed()
        });
        if hit {
            debug!(method = %method, "Memoized request reused");
        }
        request.await
    }

    /// Forget every memoized result
    pub fn clear_memoized(&self) {
        self.memo.clear();
    }

    /// Number of memoized calls
    pub fn memoized_calls(&self) -> usize {
        self.memo.len()
    }

    /// Client resolver
    pub fn resolver(&self) -> &ServiceClientResolver {
        &self.resolver
    }

    /// Request queue
    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    /// Retry policy
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}

/// Builder for [`RequestService`]
#[derive(Debug)]
pub struct RequestServiceBuilder {
    registry: ServiceRegistry,
    transport: TransportSettings,
    retry: RetryPolicy,
    concurrency: usize,
}

impl RequestServiceBuilder {
    /// Start from defaults
    pub fn new(registry: ServiceRegistry) -> Self {
        Self {
            registry,
            transport: TransportSettings::default(),
            retry: RetryPolicy::default(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Transport settings handed to every client constructor
    #[must_use]
    pub fn with_transport(mut self, transport: TransportSettings) -> Self {
        self.transport = transport;
        self
    }

    /// Retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Queue width
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Build the dispatcher
    pub fn build(self) -> RequestService {
        RequestService {
            resolver: Arc::new(ServiceClientResolver::new(
                Arc::new(self.registry),
                self.transport,
            )),
            queue: RequestQueue::new(self.concurrency),
            retry: self.retry,
            memo: Arc::new(MemoCache::new()),
        }
    }
}
