//! Domain Port Interfaces
//!
//! Contracts implemented by outer layers. The request wrapper depends only on
//! these traits; concrete provider SDK bindings live in `cloudcall-providers`.

/// External service provider ports
pub mod providers;

pub use providers::{ServiceClient, SharedServiceClient};
