//! HTTP client builder

use std::time::Duration;

use cloudcall_domain::TransportSettings;
use reqwest::{Certificate, Client, Proxy};
use serde::{Deserialize, Serialize};

/// HTTP client configuration
///
/// Connection pooling and identification. Timeout, proxy and certificates
/// come from [`TransportSettings`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            keepalive: Duration::from_secs(60),
            user_agent: format!("cloudcall/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build a client honoring proxy, extra root certificates and timeout
///
/// Extra certificates are added to the default roots, not substituted for
/// them. Errors are plain strings so they can be returned from a registry
/// factory directly.
pub fn build_http_client(
    transport: &TransportSettings,
    config: &HttpClientConfig,
) -> Result<Client, String> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(config.idle_timeout)
        .tcp_keepalive(config.keepalive)
        .timeout(transport.timeout)
        .user_agent(&config.user_agent);

    if let Some(proxy) = &transport.proxy {
        let proxy = Proxy::all(proxy).map_err(|e| format!("Invalid proxy URL '{proxy}': {e}"))?;
        builder = builder.proxy(proxy);
    }

    for (index, pem) in transport.ca_certificates.iter().enumerate() {
        let certificate = Certificate::from_pem(pem.as_bytes())
            .map_err(|e| format!("Invalid CA certificate #{}: {e}", index + 1))?;
        builder = builder.add_root_certificate(certificate);
    }

    builder
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {e}"))
}
