//! Provider Registry System
//!
//! Uses the `linkme` crate for compile-time registration of service
//! constructors that are discovered at startup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Service Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(SERVICE_...)]│
//! │                        static ENTRY: ServiceProviderEntry = ... │
//! │                              ↓                                  │
//! │  2. Startup collects:  ServiceRegistry::from_linked()           │
//! │                              ↓                                  │
//! │  3. Resolver builds:   registry.construct("S3", options, ..)    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Registering a Provider (in cloudcall-providers)
//!
//! ```ignore
//! use cloudcall_application::ports::registry::{SERVICE_PROVIDERS, ServiceProviderEntry};
//!
//! #[linkme::distributed_slice(SERVICE_PROVIDERS)]
//! static NULL_SERVICE: ServiceProviderEntry = ServiceProviderEntry {
//!     name: "Null",
//!     description: "Service that accepts every call",
//!     factory: |options, _transport| Ok(Arc::new(NullServiceClient::new(options.region.clone()))),
//! };
//! ```

pub mod service;

pub use service::{
    SERVICE_PROVIDERS, ServiceFactory, ServiceFactoryFn, ServiceProviderEntry, ServiceRegistry,
    list_service_providers,
};
