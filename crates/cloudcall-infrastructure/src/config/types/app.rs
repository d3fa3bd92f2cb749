//! Top-level application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, RequestConfig, TransportConfig};

/// Application configuration
///
/// Built once at startup by [`ConfigLoader`](crate::config::ConfigLoader)
/// and passed explicitly to whatever needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Request dispatcher configuration
    pub request: RequestConfig,

    /// Transport configuration
    pub transport: TransportConfig,
}
