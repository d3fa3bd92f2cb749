//! # cloudcall
//!
//! Retrying, concurrency-limited, optionally memoized requests against cloud
//! provider APIs.
//!
//! ## Example
//!
//! ```ignore
//! use cloudcall::infrastructure::{ConfigLoader, build_request_service};
//! use cloudcall::ServiceDescriptor;
//! use serde_json::json;
//!
//! let config = ConfigLoader::new().load()?;
//! let requests = build_request_service(&config)?;
//! let descriptor = ServiceDescriptor::new("CloudFormation")
//!     .with_credentials(json!({"accessKeyId": "AKIA..."}))
//!     .with_region("eu-west-1");
//! let stacks = requests
//!     .invoke_memoized(&descriptor, "describeStacks", json!({"StackName": "app-dev"}))
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, provider errors, the `ServiceClient` port
//! - `application` - registry, retry policy, queue, memoization, dispatcher
//! - `infrastructure` - configuration, logging, transport settings, bootstrap
//! - `providers` - linked `ServiceClient` implementations
//! - [`cli`] - the `cloudcall` command line

/// Domain layer - descriptors, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cloudcall_domain::*;
}

/// Application layer - request dispatcher and service registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cloudcall_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cloudcall_infrastructure::*;
}

/// Provider implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use cloudcall_providers::*;
}

pub mod cli;

// Re-export commonly used types at the crate root
pub use application::{RequestService, RequestServiceBuilder, RetryPolicy, ServiceRegistry};
pub use domain::*;
