//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values, then validates the result.

use std::env;
use std::path::{Path, PathBuf};

use cloudcall_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use crate::config::AppConfig;
use crate::config::legacy_env::apply_legacy_env;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,

    /// Whether unprefixed legacy variables are honored
    legacy_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
            legacy_env: true,
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Enable or disable the legacy unprefixed variables
    #[must_use]
    pub fn with_legacy_env(mut self, enabled: bool) -> Self {
        self.legacy_env = enabled;
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `CLOUDCALL__REQUEST__MAX_RETRIES`)
    /// 4. Legacy unprefixed variables (e.g., `HTTPS_PROXY`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let mut app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        if self.legacy_env {
            apply_legacy_env(&mut app_config, |key| env::var(key).ok());
        }

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_request_config(config)?;
    validate_transport_config(config)?;
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_request_config(config: &AppConfig) -> Result<()> {
    let request = &config.request;
    if request.concurrency == 0 {
        return Err(Error::configuration("Request concurrency cannot be 0"));
    }
    if request.jitter_min_ms >= request.jitter_max_ms {
        return Err(Error::configuration(format!(
            "Jitter window is empty: jitter_min_ms ({}) must be below jitter_max_ms ({})",
            request.jitter_min_ms, request.jitter_max_ms
        )));
    }
    let base = i64::try_from(request.base_backoff_ms)
        .map_err(|_| Error::configuration("Base backoff is too large"))?;
    if base + request.jitter_min_ms < 0 {
        return Err(Error::configuration(format!(
            "Backoff can become negative: base_backoff_ms ({}) + jitter_min_ms ({}) < 0",
            request.base_backoff_ms, request.jitter_min_ms
        )));
    }
    if request.default_region.trim().is_empty() {
        return Err(Error::configuration("Default region cannot be empty"));
    }
    Ok(())
}

fn validate_transport_config(config: &AppConfig) -> Result<()> {
    let transport = &config.transport;
    if transport.timeout_ms == 0 {
        return Err(Error::configuration("Client timeout cannot be 0"));
    }
    if let Some(proxy) = &transport.proxy {
        reqwest::Url::parse(proxy).config_context(format!("Invalid proxy URL '{proxy}'"))?;
    }
    if let Some(endpoint) = &transport.endpoint_url {
        reqwest::Url::parse(endpoint)
            .config_context(format!("Invalid endpoint URL '{endpoint}'"))?;
    }
    Ok(())
}
