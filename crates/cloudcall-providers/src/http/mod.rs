//! HTTP Client Construction
//!
//! Builds the `reqwest` client shared by HTTP backed service clients from the
//! process-wide [`TransportSettings`](cloudcall_domain::TransportSettings).
//!
//! - `HttpClientConfig` - Settings not covered by transport configuration
//! - `build_http_client` - Proxy, root certificates and timeout applied
//! - `HttpResponseUtils` - Response to provider error mapping (re-exported from utils)

pub mod client;

pub use client::{HttpClientConfig, build_http_client};
pub use crate::utils::HttpResponseUtils;
