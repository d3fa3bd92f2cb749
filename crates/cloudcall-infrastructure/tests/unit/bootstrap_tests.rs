//! Bootstrap wiring tests

use std::sync::Arc;

use async_trait::async_trait;
use cloudcall_application::ServiceRegistry;
use cloudcall_domain::{RawProviderError, ServiceClient, ServiceDescriptor};
use cloudcall_infrastructure::bootstrap::{build_request_service, build_request_service_with};
use cloudcall_infrastructure::config::AppConfig;
use serde_json::{Value, json};

struct TimeoutProbe {
    timeout_ms: u128,
}

#[async_trait]
impl ServiceClient for TimeoutProbe {
    fn service_name(&self) -> &str {
        "Probe"
    }

    async fn call(&self, _method: &str, _params: &Value) -> Result<Value, RawProviderError> {
        Ok(json!({ "timeoutMs": self.timeout_ms as u64 }))
    }
}

#[tokio::test]
async fn test_config_reaches_dispatcher_and_clients() {
    let mut config = AppConfig::default();
    config.request.concurrency = 5;
    config.request.max_retries = 1;
    config.transport.timeout_ms = 2500;

    let registry = ServiceRegistry::new()
        .with_service("Probe", |_, transport| {
            Ok(Arc::new(TimeoutProbe {
                timeout_ms: transport.timeout.as_millis(),
            }))
        })
        .unwrap();
    let service = build_request_service_with(&config, registry).unwrap();

    assert_eq!(service.queue().width(), 5);
    assert_eq!(service.retry_policy().max_retries, 1);

    let descriptor = ServiceDescriptor::new("Probe").with_credentials(json!({}));
    let result = service.invoke(&descriptor, "ping", json!({})).await.unwrap();
    assert_eq!(result, json!({ "timeoutMs": 2500 }));
}

#[test]
fn test_linked_providers_are_registered() {
    let service = build_request_service(&AppConfig::default()).unwrap();
    let names = service.resolver().registry().names();
    assert!(names.contains(&"Null".to_string()));
    assert!(names.contains(&"Http".to_string()));
}
