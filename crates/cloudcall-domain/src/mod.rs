//! # cloudcall Domain Layer
//!
//! Core types shared by every layer of the request wrapper: the description of
//! a target API surface, the normalized provider failure record, the options a
//! service client is constructed with, and the port every provider implements.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error enum and `Result` alias |
//! | [`constants`] | Sentinels, status codes and parameter keys |
//! | [`value_objects`] | `ServiceDescriptor`, `ProviderError`, `ClientOptions`, canonical JSON |
//! | [`ports`] | `ServiceClient` provider port |

/// Domain constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port interfaces implemented by outer layers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ServiceClient, SharedServiceClient};
pub use value_objects::{
    ClientOptions, ProviderError, RawProviderError, ServiceDescriptor, TransportSettings,
    canonical_json,
};
