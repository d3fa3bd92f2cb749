//! Application bootstrap
//!
//! Wires configuration into a ready [`RequestService`]. Service providers are
//! collected from the linkme registry, so the final binary must link
//! `cloudcall-providers` (or its own providers) for any service to resolve.

use cloudcall_application::{RequestService, ServiceRegistry};
use cloudcall_domain::error::Result;
use tracing::debug;

use crate::config::AppConfig;
use crate::transport::load_transport_settings;

/// Build the request dispatcher described by `config`
pub fn build_request_service(config: &AppConfig) -> Result<RequestService> {
    let registry = ServiceRegistry::from_linked()?;
    build_request_service_with(config, registry)
}

/// Build the request dispatcher over an explicit registry
pub fn build_request_service_with(
    config: &AppConfig,
    registry: ServiceRegistry,
) -> Result<RequestService> {
    let transport = load_transport_settings(&config.transport)?;
    debug!(
        services = ?registry.names(),
        concurrency = config.request.concurrency,
        max_retries = config.request.max_retries,
        "Request service configured"
    );

    Ok(RequestService::builder(registry)
        .with_transport(transport)
        .with_retry_policy(config.request.retry_policy())
        .with_concurrency(config.request.concurrency)
        .build())
}
