//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the request dispatcher.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration with legacy environment keys |
//! | [`logging`] | Structured logging with tracing |
//! | [`transport`] | Proxy, CA and timeout settings for clients |
//! | [`bootstrap`] | `AppConfig` to `RequestService` wiring |
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`constants`] | File locations, env keys, logging defaults |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod transport;

pub use bootstrap::{build_request_service, build_request_service_with};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
pub use transport::load_transport_settings;
