//! # cloudcall - Service Client Implementations
//!
//! Implementations of the `ServiceClient` port defined in `cloudcall-domain`,
//! registered by name in the application layer's service registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`service`] | `Null` and `Http` service clients |
//! | [`http`] | `reqwest` client built from transport settings |
//! | [`utils`] | HTTP response to provider error mapping |
//!
//! ## Usage
//!
//! Binaries only need to link the crate:
//!
//! ```ignore
//! extern crate cloudcall_providers;
//! ```

pub use cloudcall_domain::error::{Error, Result};
pub use cloudcall_domain::ports::ServiceClient;

/// Provider-specific constants
pub mod constants;

/// HTTP client construction
pub mod http;

/// Service client implementations
pub mod service;

/// Shared utilities for provider implementations
pub mod utils;

pub use service::{HttpServiceClient, NullServiceClient};
