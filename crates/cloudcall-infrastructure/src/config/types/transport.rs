//! Transport configuration types

use std::path::PathBuf;

use cloudcall_domain::value_objects::DEFAULT_REQUEST_TIMEOUT;
use serde::{Deserialize, Serialize};

/// Proxy, certificates and timeout shared by every service client
///
/// Certificate files are only paths here; they are read when the transport
/// settings are loaded at bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// HTTPS proxy URL
    pub proxy: Option<String>,

    /// Inline PEM certificates
    pub ca: Vec<String>,

    /// PEM certificate files
    pub cafile: Vec<PathBuf>,

    /// Client-level request timeout (milliseconds)
    pub timeout_ms: u64,

    /// Endpoint for the HTTP service client
    pub endpoint_url: Option<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            ca: Vec::new(),
            cafile: Vec::new(),
            timeout_ms: u64::try_from(DEFAULT_REQUEST_TIMEOUT.as_millis()).unwrap_or(120_000),
            endpoint_url: None,
        }
    }
}
