//! Linked provider registration tests

use cloudcall_application::{RequestService, ServiceRegistry, list_service_providers};
use cloudcall_domain::{ServiceDescriptor, TransportSettings};
use cloudcall_providers::service::HTTP_SERVICE_NAME;
use serde_json::json;

#[test]
fn test_providers_are_linked() {
    let names: Vec<_> = list_service_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert!(names.contains(&"Null"));
    assert!(names.contains(&HTTP_SERVICE_NAME));
}

#[test]
fn test_registry_from_linked() {
    let registry = ServiceRegistry::from_linked().unwrap();
    assert!(registry.contains("Null"));
    assert!(registry.contains("Http"));
}

#[tokio::test]
async fn test_null_service_through_dispatcher() {
    let service = RequestService::builder(ServiceRegistry::from_linked().unwrap()).build();
    let descriptor = ServiceDescriptor::new("Null")
        .with_credentials(json!({}))
        .with_region("sa-east-1");

    let result = service.invoke(&descriptor, "describe", json!({})).await.unwrap();
    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn test_http_without_credentials_gets_docs_pointer() {
    let registry = ServiceRegistry::from_linked().unwrap();
    let service = RequestService::builder(registry)
        .with_transport(TransportSettings {
            endpoint_url: Some("http://127.0.0.1:1".to_string()),
            ..TransportSettings::default()
        })
        .build();
    let descriptor = ServiceDescriptor::new("Http").with_credentials(json!({}));

    let err = service.invoke(&descriptor, "ping", json!({})).await.unwrap_err();
    assert!(err.to_string().starts_with("AWS provider credentials not found."));
    assert!(!err.provider_error().unwrap().retryable);
}
