//! Request dispatcher tests

use std::sync::Arc;
use std::time::Duration;

use cloudcall_application::{RequestService, RetryPolicy};
use cloudcall_domain::RawProviderError;
use cloudcall_domain::ServiceDescriptor;
use cloudcall_domain::constants::MISSING_CREDENTIALS_MESSAGE;
use cloudcall_domain::error::Error;
use futures::future::join_all;
use serde_json::json;

use crate::support::{Script, descriptor, failure};

#[tokio::test(start_paused = true)]
async fn test_throttled_call_is_retried_once() {
    let (service, probe) = Script::echo("CloudFormation")
        .then(Err(failure(429, false)))
        .service();

    let result = service
        .invoke(&descriptor("CloudFormation"), "describeStacks", json!({}))
        .await
        .unwrap();
    assert_eq!(result["method"], "describeStacks");
    assert_eq!(probe.calls(), 2);
    assert_eq!(probe.constructions(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_forbidden_call_is_not_retried() {
    let (service, probe) = Script::echo("S3").otherwise(Err(failure(403, true))).service();

    let err = service
        .invoke(&descriptor("S3"), "getObject", json!({"Bucket": "b", "Key": "k"}))
        .await
        .unwrap_err();
    assert_eq!(probe.calls(), 1);
    assert_eq!(err.to_string(), "Request failed with status 403");
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_retries_return_last_error() {
    let (registry, probe) = Script::echo("Lambda")
        .otherwise(Err(failure(500, true).with_code("ServiceException")))
        .registry();
    let service = RequestService::builder(registry)
        .with_retry_policy(RetryPolicy::with_max_retries(2))
        .build();

    let err = service
        .invoke(&descriptor("Lambda"), "invoke", json!({}))
        .await
        .unwrap_err();
    assert_eq!(probe.calls(), 3);
    assert_eq!(err.code().as_deref(), Some("ServiceException"));
}

#[tokio::test(start_paused = true)]
async fn test_message_falls_back_to_code() {
    let raw = RawProviderError {
        code: Some("ValidationError".to_string()),
        status_code: Some(400),
        ..Default::default()
    };
    let (service, _probe) = Script::echo("CloudFormation").then(Err(raw)).service();

    let err = service
        .invoke(&descriptor("CloudFormation"), "validateTemplate", json!({}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "ValidationError");
}

#[tokio::test]
async fn test_non_object_credentials_fail_before_dispatch() {
    let (service, probe) = Script::echo("S3").service();

    for credentials in [json!("AKIA:secret"), json!(null), json!(["AKIA"])] {
        let descriptor = ServiceDescriptor::new("S3").with_credentials(credentials);
        let err = service
            .invoke(&descriptor, "listObjects", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), MISSING_CREDENTIALS_MESSAGE);
        assert_eq!(err.code().as_deref(), Some("400"));
    }

    let err = service
        .invoke(&ServiceDescriptor::new("S3"), "listObjects", json!({}))
        .await
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(probe.constructions(), 0);
    assert_eq!(probe.calls(), 0);
}

#[tokio::test]
async fn test_key_order_does_not_split_clients() {
    let (service, probe) = Script::echo("S3").service();
    let a = ServiceDescriptor::new("S3")
        .with_credentials(json!({"accessKeyId": "AKIA", "secretAccessKey": "s"}))
        .with_region("eu-west-1");
    let b = ServiceDescriptor::new("S3")
        .with_region("eu-west-1")
        .with_credentials(json!({"secretAccessKey": "s", "accessKeyId": "AKIA"}));

    let first = service.resolver().resolve(&a, "listObjects").await.unwrap();
    let second = service.resolver().resolve(&b, "listObjects").await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    service.invoke(&a, "listObjects", json!({})).await.unwrap();
    service.invoke(&b, "listObjects", json!({})).await.unwrap();
    assert_eq!(probe.constructions(), 1);
    assert_eq!(service.resolver().cached_clients().await, 1);
}

#[tokio::test]
async fn test_only_whitelisted_fields_reach_construction() {
    let (service, probe) = Script::echo("CloudFormation").service();
    let descriptor = descriptor("CloudFormation")
        .with_param("useCache", json!(true))
        .with_param("profile", json!("dev"));

    service
        .invoke(&descriptor, "describeStacks", json!({}))
        .await
        .unwrap();

    let options = probe.options.lock().unwrap();
    assert_eq!(
        serde_json::to_value(&options[0]).unwrap(),
        json!({"credentials": {"accessKeyId": "AKIAEXAMPLE"}, "region": "us-east-1"})
    );
}

#[tokio::test]
async fn test_transfer_acceleration_only_for_writes() {
    let (service, probe) = Script::echo("S3").service();
    let descriptor = descriptor("S3").with_transfer_acceleration(true);

    service.invoke(&descriptor, "putObject", json!({})).await.unwrap();
    service.invoke(&descriptor, "upload", json!({})).await.unwrap();
    service.invoke(&descriptor, "getObject", json!({})).await.unwrap();

    let options = probe.options.lock().unwrap();
    let flags: Vec<_> = options.iter().map(|o| o.use_accelerate_endpoint).collect();
    assert_eq!(flags, vec![Some(true), Some(true), Some(false)]);
}

#[tokio::test(start_paused = true)]
async fn test_queue_bounds_concurrent_calls() {
    let (service, probe) = Script::echo("S3")
        .latency(Duration::from_millis(250))
        .service();
    let descriptor = descriptor("S3");

    let calls = (0..8).map(|i| service.invoke(&descriptor, "headObject", json!({ "Key": i })));
    let results = join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(probe.calls(), 8);
    assert_eq!(probe.peak(), 2, "default queue runs two calls at once");
    assert_eq!(service.queue().in_flight(), 0);
}

#[tokio::test]
async fn test_dotted_service_names_dispatch() {
    let (service, probe) = Script::echo("DynamoDB.DocumentClient").service();
    let result = service
        .invoke(
            &descriptor("DynamoDB.DocumentClient"),
            "get",
            json!({"TableName": "t", "Key": {"id": 1}}),
        )
        .await
        .unwrap();
    assert_eq!(result["params"]["TableName"], "t");
    assert_eq!(probe.calls(), 1);
}

#[tokio::test]
async fn test_unknown_service_is_configuration_error() {
    let (service, _probe) = Script::echo("S3").service();
    let err = service
        .invoke(&descriptor("Lambda"), "invoke", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownService { .. }));
    assert!(err.is_configuration());
}

#[test]
fn test_request_service_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<RequestService>();
}
