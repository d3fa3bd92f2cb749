//! Provider Constants
//!
//! Constants specific to provider implementations. Request semantics live in
//! `cloudcall_domain::constants`.

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Header carrying the target service name
pub const HEADER_SERVICE: &str = "x-cloudcall-service";

/// Header carrying the target region
pub const HEADER_REGION: &str = "x-cloudcall-region";

/// Header carrying the access key id
pub const HEADER_ACCESS_KEY_ID: &str = "x-cloudcall-access-key-id";

/// Header carrying the session token, when the credentials have one
pub const HEADER_SESSION_TOKEN: &str = "x-cloudcall-session-token";

/// Header set when the accelerate endpoint is requested
pub const HEADER_ACCELERATE: &str = "x-cloudcall-accelerate";

/// Header a server may use to report the provider error code
pub const HEADER_ERROR_TYPE: &str = "x-amzn-errortype";

// ============================================================================
// CREDENTIAL KEYS
// ============================================================================

/// Access key id credential field
pub const CREDENTIAL_ACCESS_KEY_ID: &str = "accessKeyId";

/// Session token credential field
pub const CREDENTIAL_SESSION_TOKEN: &str = "sessionToken";

// ============================================================================
// ERROR CODES
// ============================================================================

/// Code of connection-level failures
pub const NETWORKING_ERROR_CODE: &str = "NetworkingError";

/// Code of requests that hit the client timeout
pub const TIMEOUT_ERROR_CODE: &str = "TimeoutError";

/// Code of a response body that is not valid JSON
pub const PARSE_ERROR_CODE: &str = "ResponseParseError";

/// Message of the credential chain's final failure
pub const MISSING_CREDENTIALS_CHAIN_MESSAGE: &str =
    "Missing credentials in config, if using AWS_CONFIG_FILE, set AWS_SDK_LOAD_CONFIG=1";

/// Message of the instance metadata lookup at the end of the credential chain
pub const METADATA_LOOKUP_FAILED_MESSAGE: &str = "EC2 Metadata roleName request returned error";
