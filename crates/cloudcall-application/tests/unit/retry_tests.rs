//! Retry loop tests
//!
//! Time is paused so backoff sleeps complete instantly while still being
//! observable through `tokio::time::Instant`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use cloudcall_application::{RetryPolicy, normalize_provider_error};
use cloudcall_domain::RawProviderError;
use cloudcall_domain::error::{Error, Result};

use crate::support::failure;

async fn run_with(policy: RetryPolicy, outcomes: Vec<RawProviderError>) -> (Result<u32>, u32) {
    let attempts = AtomicU32::new(0);
    let result = policy
        .run("test.call", |attempt| {
            attempts.fetch_add(1, Ordering::SeqCst);
            let outcome = outcomes.get(attempt as usize).cloned();
            async move {
                match outcome {
                    Some(raw) => Err(normalize_provider_error(raw)),
                    None => Ok(attempt),
                }
            }
        })
        .await;
    (result, attempts.load(Ordering::SeqCst))
}

#[tokio::test(start_paused = true)]
async fn test_throttling_then_success_takes_two_attempts() {
    let started = tokio::time::Instant::now();
    let (result, attempts) = run_with(RetryPolicy::default(), vec![failure(429, false)]).await;
    assert_eq!(result.unwrap(), 1);
    assert_eq!(attempts, 2);

    let waited = started.elapsed();
    assert!(waited >= Duration::from_millis(4000), "waited {waited:?}");
    assert!(waited < Duration::from_millis(7000), "waited {waited:?}");
}

#[tokio::test(start_paused = true)]
async fn test_forbidden_fails_on_first_attempt() {
    let (result, attempts) = run_with(RetryPolicy::default(), vec![failure(403, true)]).await;
    let err = result.unwrap_err();
    assert_eq!(attempts, 1);
    assert_eq!(err.provider_error().unwrap().status_code, Some(403));
}

#[tokio::test(start_paused = true)]
async fn test_gives_up_after_max_retries() {
    let outcomes = vec![failure(503, true); 10];
    let (result, attempts) = run_with(RetryPolicy::with_max_retries(3), outcomes).await;
    assert!(result.is_err());
    assert_eq!(attempts, 4);
}

#[tokio::test(start_paused = true)]
async fn test_non_provider_errors_are_terminal() {
    let attempts = AtomicU32::new(0);
    let result: Result<()> = RetryPolicy::default()
        .run("test.call", |_| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::configuration("bad descriptor")) }
        })
        .await;
    assert!(result.unwrap_err().is_configuration());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_credentials_failure_shadows_rate_limit() {
    let raw = RawProviderError::new("Missing credentials in config")
        .with_status(429)
        .with_retryable(true)
        .caused_by(RawProviderError::new("EC2 Metadata roleName request returned error"));
    let (result, attempts) = run_with(RetryPolicy::default(), vec![raw]).await;
    assert_eq!(attempts, 1);
    assert!(
        result
            .unwrap_err()
            .to_string()
            .starts_with("AWS provider credentials not found.")
    );
}
