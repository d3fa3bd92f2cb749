//! Transport settings loading tests

use std::io::Write;
use std::time::Duration;

use cloudcall_infrastructure::config::TransportConfig;
use cloudcall_infrastructure::transport::load_transport_settings;

const PEM: &str = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";

#[test]
fn test_defaults() {
    let settings = load_transport_settings(&TransportConfig::default()).unwrap();
    assert_eq!(settings.proxy, None);
    assert!(settings.ca_certificates.is_empty());
    assert_eq!(settings.timeout, Duration::from_millis(120_000));
}

#[test]
fn test_inline_certificates_precede_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PEM.as_bytes()).unwrap();

    let config = TransportConfig {
        ca: vec!["inline".to_string()],
        cafile: vec![file.path().to_path_buf()],
        timeout_ms: 1500,
        ..TransportConfig::default()
    };
    let settings = load_transport_settings(&config).unwrap();
    assert_eq!(settings.ca_certificates, vec!["inline".to_string(), PEM.to_string()]);
    assert_eq!(settings.timeout, Duration::from_millis(1500));
}

#[test]
fn test_missing_ca_file_fails() {
    let config = TransportConfig {
        cafile: vec!["/nonexistent/ca.pem".into()],
        ..TransportConfig::default()
    };
    let err = load_transport_settings(&config).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/ca.pem"));
}
