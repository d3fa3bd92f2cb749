//! Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ServiceClient`] | One constructed client for a provider API surface |

/// Service client port
pub mod service_client;

pub use service_client::{ServiceClient, SharedServiceClient};
