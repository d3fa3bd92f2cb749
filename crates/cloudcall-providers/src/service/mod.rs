//! Service client implementations
//!
//! | Name | Client | Description |
//! |------|--------|-------------|
//! | `Null` | [`NullServiceClient`] | Answers `{}` to every call |
//! | `Http` | [`HttpServiceClient`] | JSON over HTTP to a configured endpoint |
//!
//! Both register through `SERVICE_PROVIDERS`; linking this crate is enough
//! for `ServiceRegistry::from_linked` to see them.

pub mod http;
pub mod null;

pub use http::{HTTP_SERVICE_NAME, HttpServiceClient, missing_credentials_error};
pub use null::NullServiceClient;
