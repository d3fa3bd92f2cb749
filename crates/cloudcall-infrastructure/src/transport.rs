//! Transport settings loading
//!
//! Turns [`TransportConfig`] into the [`TransportSettings`] handed to every
//! client constructor. Certificate files are read here, once, so a missing
//! file fails startup instead of the first request.

use std::time::Duration;

use cloudcall_domain::TransportSettings;
use cloudcall_domain::error::Result;
use tracing::debug;

use crate::config::TransportConfig;
use crate::error_ext::ErrorContext;

/// Build transport settings, reading configured CA files
///
/// Inline certificates come first, followed by file contents in the
/// configured order.
pub fn load_transport_settings(config: &TransportConfig) -> Result<TransportSettings> {
    let mut ca_certificates = config.ca.clone();
    for path in &config.cafile {
        let pem = std::fs::read_to_string(path)
            .io_context(format!("Failed to read CA file {}", path.display()))?;
        ca_certificates.push(pem);
    }

    if config.proxy.is_some() || !ca_certificates.is_empty() {
        debug!(
            proxy = config.proxy.is_some(),
            certificates = ca_certificates.len(),
            "Custom transport configured"
        );
    }

    Ok(TransportSettings {
        proxy: config.proxy.clone(),
        ca_certificates,
        timeout: Duration::from_millis(config.timeout_ms),
        endpoint_url: config.endpoint_url.clone(),
    })
}
