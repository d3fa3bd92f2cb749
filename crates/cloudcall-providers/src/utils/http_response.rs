//! HTTP Response Utilities
//!
//! Maps HTTP outcomes onto [`RawProviderError`] the way cloud SDKs report
//! them: status code, provider code and message from the body, and a
//! retryable flag for throttling, server faults and connection failures.

use cloudcall_domain::RawProviderError;
use reqwest::Response;
use serde_json::{Map, Value};

use crate::constants::{
    HEADER_ERROR_TYPE, NETWORKING_ERROR_CODE, PARSE_ERROR_CODE, TIMEOUT_ERROR_CODE,
};

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// An empty successful body yields `{}`.
    pub async fn check_and_parse(response: Response) -> Result<Value, RawProviderError> {
        let status = response.status().as_u16();
        let error_type = response
            .headers()
            .get(HEADER_ERROR_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        if !(200..300).contains(&status) {
            let mut error = Self::error_from_body(status, &body);
            if error.code.is_none() {
                error.code = error_type;
            }
            return Err(error);
        }

        if body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_str(&body).map_err(|e| {
            RawProviderError::new(format!("Failed to parse response body: {e}"))
                .with_code(PARSE_ERROR_CODE)
                .with_status(status)
        })
    }

    /// Provider error for a non-success status and its body
    ///
    /// `message`/`Message` and `code`/`__type` are read from a JSON body;
    /// other body fields are kept as extra fields. A non-JSON body becomes
    /// the message.
    pub fn error_from_body(status: u16, body: &str) -> RawProviderError {
        let mut error = RawProviderError {
            status_code: Some(status),
            retryable: is_retryable_status(status),
            ..Default::default()
        };

        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(mut fields)) => {
                error.message = take_string(&mut fields, &["message", "Message"]);
                error.code = take_string(&mut fields, &["code", "Code", "__type"])
                    .map(|code| strip_type_prefix(&code).to_string());
                error.extra = fields;
            }
            _ if !body.trim().is_empty() => error.message = Some(body.trim().to_string()),
            _ => {}
        }
        error
    }

    /// Provider error for a request that produced no response
    pub fn transport_error(err: &reqwest::Error) -> RawProviderError {
        let code = if err.is_timeout() {
            TIMEOUT_ERROR_CODE
        } else {
            NETWORKING_ERROR_CODE
        };
        RawProviderError::new(err.to_string())
            .with_code(code)
            .with_retryable(true)
    }
}

/// Throttling and server faults are transient
fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

fn take_string(fields: &mut Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match fields.remove(*key) {
        Some(Value::String(value)) => Some(value),
        Some(other) => {
            fields.insert((*key).to_string(), other);
            None
        }
        None => None,
    })
}

/// `com.amazon.coral.service#ThrottlingException` gives `ThrottlingException`
fn strip_type_prefix(code: &str) -> &str {
    code.rsplit_once('#').map_or(code, |(_, name)| name)
}
