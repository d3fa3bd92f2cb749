//! TOML configuration file tests

use std::io::Write;

use cloudcall_infrastructure::config::{AppConfig, ConfigLoader};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn load(contents: &str) -> cloudcall_domain::Result<AppConfig> {
    let file = write_config(contents);
    ConfigLoader::new()
        .with_config_path(file.path())
        .with_legacy_env(false)
        .load()
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = ConfigLoader::new()
        .with_config_path("/nonexistent/cloudcall.toml")
        .with_legacy_env(false)
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_sections_merge_with_defaults() {
    let config = load(
        r#"
        [request]
        max_retries = 1
        concurrency = 8

        [transport]
        timeout_ms = 30000
        "#,
    )
    .unwrap();

    assert_eq!(config.request.max_retries, 1);
    assert_eq!(config.request.concurrency, 8);
    assert_eq!(config.request.base_backoff_ms, 5000);
    assert_eq!(config.request.default_region, "us-east-1");
    assert_eq!(config.transport.timeout_ms, 30000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_values_fail_validation() {
    let err = load(
        r#"
        [request]
        concurrency = 0
        "#,
    )
    .unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("concurrency"));
}

#[test]
fn test_type_mismatch_is_configuration_error() {
    let err = load(
        r#"
        [request]
        max_retries = "lots"
        "#,
    )
    .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_save_and_reload() {
    let mut config = AppConfig::default();
    config.request.max_retries = 2;
    config.transport.proxy = Some("http://proxy.internal:3128".to_string());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cloudcall.toml");
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_legacy_env(false);
    loader.save_to_file(&config, &path).unwrap();

    assert_eq!(loader.load().unwrap(), config);
}
