//! Configuration
//!
//! | Source | Example |
//! |--------|---------|
//! | Defaults | `AppConfig::default()` |
//! | TOML file | `cloudcall.toml`, `./cloudcall/cloudcall.toml`, `$XDG_CONFIG_HOME/cloudcall/cloudcall.toml` |
//! | Prefixed environment | `CLOUDCALL__REQUEST__MAX_RETRIES=2` |
//! | Legacy environment | `HTTPS_PROXY`, `ca`, `cafile`, `AWS_CLIENT_TIMEOUT`, `SLS_AWS_REQUEST_MAX_RETRIES` |
//!
//! Later sources override earlier ones.

pub mod legacy_env;
pub mod loader;
pub mod types;

pub use legacy_env::apply_legacy_env;
pub use loader::ConfigLoader;
pub use types::{AppConfig, LoggingConfig, RequestConfig, TransportConfig};
