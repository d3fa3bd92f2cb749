//! Environment variable configuration tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p cloudcall-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! `env::set_var`/`env::remove_var` are `unsafe` in the 2024 edition.
//! Tests MUST run with `--test-threads=1` to prevent data races.

use std::env;
use std::path::PathBuf;

use cloudcall_infrastructure::config::ConfigLoader;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

fn loader() -> ConfigLoader {
    ConfigLoader::new().with_config_path("/nonexistent/cloudcall.toml")
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_prefixed_env_vars_loaded() {
    set_env("CLOUDCALL__REQUEST__MAX_RETRIES", "2");
    set_env("CLOUDCALL__TRANSPORT__ENDPOINT_URL", "http://localhost:4566");

    let config = loader().load().unwrap();
    assert_eq!(config.request.max_retries, 2);
    assert_eq!(
        config.transport.endpoint_url.as_deref(),
        Some("http://localhost:4566")
    );

    remove_env("CLOUDCALL__REQUEST__MAX_RETRIES");
    remove_env("CLOUDCALL__TRANSPORT__ENDPOINT_URL");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_legacy_keys_override_prefixed() {
    set_env("CLOUDCALL__REQUEST__MAX_RETRIES", "2");
    set_env("SLS_AWS_REQUEST_MAX_RETRIES", "0");
    set_env("HTTPS_PROXY", "http://corp-proxy:8080");
    set_env("cafile", "/etc/ssl/corp.pem, /etc/ssl/extra.pem");
    set_env("AWS_CLIENT_TIMEOUT", "5000");

    let config = loader().load().unwrap();
    assert_eq!(config.request.max_retries, 0);
    assert_eq!(config.transport.proxy.as_deref(), Some("http://corp-proxy:8080"));
    assert_eq!(
        config.transport.cafile,
        vec![
            PathBuf::from("/etc/ssl/corp.pem"),
            PathBuf::from("/etc/ssl/extra.pem")
        ]
    );
    assert_eq!(config.transport.timeout_ms, 5000);

    remove_env("CLOUDCALL__REQUEST__MAX_RETRIES");
    remove_env("SLS_AWS_REQUEST_MAX_RETRIES");
    remove_env("HTTPS_PROXY");
    remove_env("cafile");
    remove_env("AWS_CLIENT_TIMEOUT");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_legacy_keys_can_be_disabled() {
    set_env("HTTPS_PROXY", "http://corp-proxy:8080");

    let config = loader().with_legacy_env(false).load().unwrap();
    assert_eq!(config.transport.proxy, None);

    remove_env("HTTPS_PROXY");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_invalid_legacy_proxy_fails_validation() {
    set_env("proxy", "::not-a-url::");

    let err = loader().load().unwrap_err();
    assert!(err.to_string().contains("Invalid proxy URL"));

    remove_env("proxy");
}
