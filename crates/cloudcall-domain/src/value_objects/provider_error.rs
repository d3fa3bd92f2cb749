//! Provider failure records
//!
//! [`RawProviderError`] is the shape a [`ServiceClient`](crate::ports::ServiceClient)
//! reports a failed call with, mirroring what cloud SDKs attach to their
//! errors. [`ProviderError`] is the normalized record the retry policy and
//! callers work with.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Un-normalized failure as reported by a service client
///
/// All fields are optional because SDKs are inconsistent about what they fill
/// in; `retryable` defaults to `false` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProviderError {
    /// Provider message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Provider error code (e.g. `Throttling`, `AccessDenied`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// HTTP status code of the failed response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Whether the provider considers the failure transient
    #[serde(default)]
    pub retryable: bool,
    /// Underlying failure this one wraps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_error: Option<Box<RawProviderError>>,
    /// Any other fields reported by the provider (request id, timestamps...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawProviderError {
    /// Create an error with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Set the provider code
    pub fn with_code<S: Into<String>>(mut self, code: S) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the status code
    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Set the retryable flag
    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Attach the underlying failure
    pub fn caused_by(mut self, original: RawProviderError) -> Self {
        self.original_error = Some(Box::new(original));
        self
    }

    /// Attach an extra provider field
    pub fn with_field<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Message, or the code when the provider sent no message
    pub fn display_message(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.code.clone())
            .unwrap_or_else(|| "Unknown provider error".to_string())
    }

    /// Iterate this error and its `original_error` chain, outermost first
    pub fn chain(&self) -> impl Iterator<Item = &RawProviderError> {
        std::iter::successors(Some(self), |e| e.original_error.as_deref())
    }
}

impl fmt::Display for RawProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_message())
    }
}

impl std::error::Error for RawProviderError {}

/// Normalized provider failure
///
/// The retry policy only looks at `status_code`, `code`, `retryable` and
/// `terminal`; the raw error stays attached so callers can inspect request
/// ids and the like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderError {
    /// Provider error code
    pub code: Option<String>,
    /// HTTP status code
    pub status_code: Option<u16>,
    /// Whether the failure may be retried
    pub retryable: bool,
    /// Never retried, not even on a rate-limit status
    #[serde(default)]
    pub terminal: bool,
    /// The failure as reported by the provider
    pub raw: RawProviderError,
}

impl ProviderError {
    /// Normalize a raw error, keeping the provider's classification
    pub fn from_raw(raw: RawProviderError) -> Self {
        Self {
            code: raw.code.clone(),
            status_code: raw.status_code,
            retryable: raw.retryable,
            terminal: false,
            raw,
        }
    }

    /// Mark the failure as terminal
    pub fn non_retryable(mut self) -> Self {
        self.retryable = false;
        self.terminal = true;
        self
    }
}

impl From<RawProviderError> for ProviderError {
    fn from(raw: RawProviderError) -> Self {
        Self::from_raw(raw)
    }
}
