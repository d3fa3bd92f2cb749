//! Memoized dispatch tests

use std::time::Duration;

use futures::future::join_all;
use serde_json::json;

use crate::support::{Script, descriptor, failure};

#[tokio::test(start_paused = true)]
async fn test_concurrent_identical_calls_share_one_request() {
    let (service, probe) = Script::echo("CloudFormation")
        .latency(Duration::from_millis(100))
        .service();
    let descriptor = descriptor("CloudFormation");

    let calls = (0..100).map(|_| {
        service.invoke_memoized(&descriptor, "describeStacks", json!({"StackName": "app"}))
    });
    let results = join_all(calls).await;

    assert_eq!(probe.calls(), 1);
    let first = results[0].as_ref().unwrap();
    assert!(results.iter().all(|r| r.as_ref().unwrap() == first));
    assert_eq!(service.memoized_calls(), 1);
}

#[tokio::test]
async fn test_settled_result_is_reused() {
    let (service, probe) = Script::echo("S3").service();
    let descriptor = descriptor("S3");

    let a = service
        .invoke_memoized(&descriptor, "listObjectsV2", json!({"Bucket": "b", "Prefix": "p"}))
        .await
        .unwrap();
    let b = service
        .invoke_memoized(&descriptor, "listObjectsV2", json!({"Prefix": "p", "Bucket": "b"}))
        .await
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(probe.calls(), 1);

    service.clear_memoized();
    service
        .invoke_memoized(&descriptor, "listObjectsV2", json!({"Bucket": "b", "Prefix": "p"}))
        .await
        .unwrap();
    assert_eq!(probe.calls(), 2);
}

#[tokio::test]
async fn test_region_distinguishes_memoized_calls() {
    let (service, probe) = Script::echo("S3").service();
    let east = descriptor("S3").with_region("us-east-1");
    let west = descriptor("S3").with_region("us-west-2");

    let (a, b) = tokio::join!(
        service.invoke_memoized(&east, "getBucketLocation", json!({"Bucket": "b"})),
        service.invoke_memoized(&west, "getBucketLocation", json!({"Bucket": "b"})),
    );

    assert_eq!(a.unwrap()["region"], "us-east-1");
    assert_eq!(b.unwrap()["region"], "us-west-2");
    assert_eq!(probe.calls(), 2);
    assert_eq!(probe.constructions(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_rejections_are_memoized() {
    let (service, probe) = Script::echo("S3").otherwise(Err(failure(404, false))).service();
    let descriptor = descriptor("S3");

    let first = service
        .invoke_memoized(&descriptor, "headBucket", json!({"Bucket": "gone"}))
        .await
        .unwrap_err();
    let second = service
        .invoke_memoized(&descriptor, "headBucket", json!({"Bucket": "gone"}))
        .await
        .unwrap_err();

    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(probe.calls(), 1);
}

#[tokio::test]
async fn test_invalid_descriptor_is_not_memoized() {
    let (service, _probe) = Script::echo("S3").service();
    let descriptor = cloudcall_domain::ServiceDescriptor::new("S3");

    let err = service
        .invoke_memoized(&descriptor, "listBuckets", json!({}))
        .await
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(service.memoized_calls(), 0);
}

#[tokio::test]
async fn test_method_and_params_do_not_run_together() {
    let (service, probe) = Script::echo("DynamoDB").service();
    let descriptor = descriptor("DynamoDB");

    let a = service
        .invoke_memoized(&descriptor, "get", json!(12))
        .await
        .unwrap();
    let b = service
        .invoke_memoized(&descriptor, "get1", json!(2))
        .await
        .unwrap();

    assert_eq!(a["method"], "get");
    assert_eq!(a["params"], 12);
    assert_eq!(b["method"], "get1");
    assert_eq!(b["params"], 2);
    assert_eq!(probe.calls(), 2);
    assert_eq!(service.memoized_calls(), 2);
}
