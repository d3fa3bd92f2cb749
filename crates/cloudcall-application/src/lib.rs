//! # cloudcall Application Layer
//!
//! Orchestrates provider calls on top of the domain types:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports::registry`] | Service constructor registry (linkme + programmatic) |
//! | [`domain_services`] | Retry policy, request queue, client resolver, memoization |
//! | [`use_cases`] | [`RequestService`], the request dispatcher |
//!
//! ## Control flow
//!
//! ```text
//! invoke_memoized ─► MemoCache ─┐
//!                               ▼
//! invoke ─► validate ─► ServiceClientResolver ─► RequestQueue ─► RetryPolicy ─► ServiceClient
//! ```

/// Application constants
pub mod constants;
/// Domain services used by the request dispatcher
pub mod domain_services;
/// Application ports (service registry)
pub mod ports;
/// Use cases
pub mod use_cases;

pub use domain_services::{
    MemoCache, RequestQueue, RetryPolicy, ServiceClientResolver, normalize_provider_error,
};
pub use ports::registry::{
    SERVICE_PROVIDERS, ServiceProviderEntry, ServiceRegistry, list_service_providers,
};
pub use use_cases::{RequestService, RequestServiceBuilder};
