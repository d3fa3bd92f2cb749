//! Domain layer constants
//!
//! Values that are part of the request semantics themselves (error sentinels,
//! status codes, parameter names). Tunables such as retry counts and timeouts
//! live in `cloudcall-infrastructure`.

// ============================================================================
// SERVICE DESCRIPTOR PARAMETERS
// ============================================================================

/// Parameter holding the structured credentials object
pub const PARAM_CREDENTIALS: &str = "credentials";

/// Parameter holding the target region
pub const PARAM_REGION: &str = "region";

/// Parameter enabling S3 transfer acceleration for write methods
pub const PARAM_TRANSFER_ACCELERATION: &str = "isS3TransferAccelerationEnabled";

/// Region used when a descriptor does not name one
pub const DEFAULT_REGION: &str = "us-east-1";

// ============================================================================
// STORAGE SERVICE
// ============================================================================

/// Name of the object storage service that supports transfer acceleration
pub const STORAGE_SERVICE_NAME: &str = "S3";

/// Storage methods that are routed through the accelerate endpoint
pub const ACCELERATED_METHODS: &[&str] = &["upload", "putObject"];

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

/// HTTP-like status attached to configuration errors
pub const CONFIGURATION_ERROR_STATUS: u16 = 400;

/// Status code that is never retried even when flagged retryable
pub const STATUS_FORBIDDEN: u16 = 403;

/// Rate limit status code, always retried
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Provider code that is never retried
pub const CREDENTIALS_ERROR_CODE: &str = "CredentialsError";

/// Message prefix of provider errors raised when no credentials could be found
pub const MISSING_CREDENTIALS_PREFIX: &str = "Missing credentials in config";

/// Message prefix of the last-resort instance metadata credentials lookup
pub const EC2_METADATA_PREFIX: &str = "EC2 Metadata";

/// Documentation pointer shown when the credential chain is exhausted
pub const CREDENTIALS_SETUP_URL: &str = "http://slss.io/aws-creds-setup";

/// Message returned when `credentials` is absent or not an object
pub const MISSING_CREDENTIALS_MESSAGE: &str =
    "Inappropriate call of invoke(), missing credentials in service options";
