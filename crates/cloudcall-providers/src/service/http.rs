//! HTTP service client
//!
//! Posts each call as JSON to `<endpoint>/<method>`. Service, region and
//! credentials travel as headers. Intended for local emulators and gateways
//! that speak plain JSON.
//!
//! Credentials are resolved the way SDKs do: when the credentials object has
//! no `accessKeyId`, the call fails before any request with a
//! `Missing credentials in config` error whose root cause is the instance
//! metadata lookup.

use std::sync::Arc;

use async_trait::async_trait;
use cloudcall_application::ports::registry::ServiceProviderEntry;
use cloudcall_domain::constants::CREDENTIALS_ERROR_CODE;
use cloudcall_domain::{
    ClientOptions, RawProviderError, ServiceClient, SharedServiceClient, TransportSettings,
};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::constants::{
    CONTENT_TYPE_JSON, CREDENTIAL_ACCESS_KEY_ID, CREDENTIAL_SESSION_TOKEN, HEADER_ACCELERATE,
    HEADER_ACCESS_KEY_ID, HEADER_REGION, HEADER_SERVICE, HEADER_SESSION_TOKEN,
    METADATA_LOOKUP_FAILED_MESSAGE, MISSING_CREDENTIALS_CHAIN_MESSAGE,
};
use crate::http::{HttpClientConfig, build_http_client};
use crate::utils::HttpResponseUtils;

/// Service name the HTTP client registers under
pub const HTTP_SERVICE_NAME: &str = "Http";

/// JSON-over-HTTP service client
///
/// Receives its HTTP client via constructor injection.
pub struct HttpServiceClient {
    endpoint: String,
    options: ClientOptions,
    http_client: Client,
}

impl HttpServiceClient {
    /// Create a client posting to `endpoint`
    pub fn new<S: Into<String>>(endpoint: S, options: ClientOptions, http_client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            options,
            http_client,
        }
    }

    /// Endpoint calls are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// URL for `method`
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), method)
    }

    /// Access key from the credentials, or the credential chain failure
    fn access_key_id(&self) -> Result<&str, RawProviderError> {
        self.options
            .credential(CREDENTIAL_ACCESS_KEY_ID)
            .filter(|key| !key.is_empty())
            .ok_or_else(missing_credentials_error)
    }
}

/// Failure reported when no credential source produced an access key
pub fn missing_credentials_error() -> RawProviderError {
    RawProviderError::new(MISSING_CREDENTIALS_CHAIN_MESSAGE)
        .with_code(CREDENTIALS_ERROR_CODE)
        .with_retryable(true)
        .caused_by(
            RawProviderError::new(METADATA_LOOKUP_FAILED_MESSAGE)
                .with_code(CREDENTIALS_ERROR_CODE),
        )
}

#[async_trait]
impl ServiceClient for HttpServiceClient {
    fn service_name(&self) -> &str {
        HTTP_SERVICE_NAME
    }

    async fn call(&self, method: &str, params: &Value) -> Result<Value, RawProviderError> {
        let access_key_id = self.access_key_id()?;
        let url = self.method_url(method);
        debug!(url = %url, region = %self.options.region, "HTTP service call");

        let mut request = self
            .http_client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(HEADER_SERVICE, HTTP_SERVICE_NAME)
            .header(HEADER_REGION, &self.options.region)
            .header(HEADER_ACCESS_KEY_ID, access_key_id);
        if let Some(token) = self.options.credential(CREDENTIAL_SESSION_TOKEN) {
            request = request.header(HEADER_SESSION_TOKEN, token);
        }
        if self.options.use_accelerate_endpoint == Some(true) {
            request = request.header(HEADER_ACCELERATE, "true");
        }

        let response = request
            .json(params)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error(&e))?;

        HttpResponseUtils::check_and_parse(response).await
    }
}

fn http_factory(
    options: &ClientOptions,
    transport: &TransportSettings,
) -> Result<SharedServiceClient, String> {
    let endpoint = transport
        .endpoint_url
        .clone()
        .ok_or_else(|| "Http service requires transport.endpoint_url".to_string())?;
    let http_client = build_http_client(transport, &HttpClientConfig::default())?;
    Ok(Arc::new(HttpServiceClient::new(
        endpoint,
        options.clone(),
        http_client,
    )))
}

#[linkme::distributed_slice(cloudcall_application::ports::registry::SERVICE_PROVIDERS)]
static HTTP_SERVICE: ServiceProviderEntry = ServiceProviderEntry {
    name: HTTP_SERVICE_NAME,
    description: "JSON over HTTP client posting to <endpoint_url>/<method>",
    factory: http_factory,
};
