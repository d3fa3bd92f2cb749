//! Infrastructure layer constants
//!
//! Configuration file locations, environment keys and logging defaults.
//! Request semantics live in `cloudcall_domain::constants`, dispatcher
//! defaults in `cloudcall_application::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cloudcall.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cloudcall";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CLOUDCALL";

/// Separator between prefix, section and key in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LEGACY ENVIRONMENT KEYS
// ============================================================================

/// Proxy URL keys, first match wins
pub const ENV_PROXY_KEYS: &[&str] = &["proxy", "HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy"];

/// Inline CA certificate keys, first match wins
pub const ENV_CA_KEYS: &[&str] = &["ca", "HTTPS_CA", "https_ca"];

/// CA file path keys, first match wins
pub const ENV_CAFILE_KEYS: &[&str] = &["cafile", "HTTPS_CAFILE", "https_cafile"];

/// Client timeout keys (milliseconds), first match wins
pub const ENV_TIMEOUT_KEYS: &[&str] = &["AWS_CLIENT_TIMEOUT", "aws_client_timeout"];

/// Maximum retries key
pub const ENV_MAX_RETRIES_KEY: &str = "SLS_AWS_REQUEST_MAX_RETRIES";

/// Separator between entries of `ca` and `cafile`
pub const LIST_SEPARATOR: char = ',';

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "CLOUDCALL_LOG";

/// Log file name used when the configured path has no stem
pub const DEFAULT_LOG_FILE_STEM: &str = "cloudcall";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;
