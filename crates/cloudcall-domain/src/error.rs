//! Error handling types
//!
//! Errors are `Clone` so a single memoized failure can be handed to every
//! caller waiting on the same shared request.

use std::sync::Arc;

use thiserror::Error;

use crate::constants::CONFIGURATION_ERROR_STATUS;
use crate::value_objects::ProviderError;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cloudcall
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Malformed service descriptor or invalid configuration
    #[error("{message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// HTTP-like status code (400 for caller mistakes)
        status_code: u16,
        /// Optional source error
        #[source]
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },

    /// No constructor is registered under the requested service name
    #[error("Unknown service '{name}'. Available services: {available:?}")]
    UnknownService {
        /// Requested service name
        name: String,
        /// Registered service names
        available: Vec<String>,
    },

    /// A registered constructor refused to build a client
    #[error("Failed to construct {service} client: {message}")]
    ClientConstruction {
        /// Service name
        service: String,
        /// Constructor failure description
        message: String,
    },

    /// Terminal failure reported by the provider
    #[error("{message}")]
    Provider {
        /// Human readable message
        message: String,
        /// Provider error code, when the provider reported one
        code: Option<String>,
        /// Normalized provider failure, kept for inspection by callers
        provider_error: Box<ProviderError>,
    },

    /// JSON parsing or serialization error
    #[error("JSON error: {message}")]
    Json {
        /// Description of the JSON error
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error with the default 400 status
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            status_code: CONFIGURATION_ERROR_STATUS,
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            status_code: CONFIGURATION_ERROR_STATUS,
            source: Some(Arc::new(source)),
        }
    }
}

// Provider and client error creation methods
impl Error {
    /// Create a provider error from a normalized failure
    pub fn provider<S: Into<String>>(message: S, provider_error: ProviderError) -> Self {
        Self::Provider {
            message: message.into(),
            code: provider_error.code.clone(),
            provider_error: Box::new(provider_error),
        }
    }

    /// Create an unknown service error
    pub fn unknown_service<S: Into<String>>(name: S, available: Vec<String>) -> Self {
        Self::UnknownService {
            name: name.into(),
            available,
        }
    }

    /// Create a client construction error
    pub fn client_construction<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ClientConstruction {
            service: service.into(),
            message: message.into(),
        }
    }
}

// Generic error creation methods
impl Error {
    /// Create a JSON error
    pub fn json<S: Into<String>>(message: S) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Accessors
impl Error {
    /// Error code surfaced to callers
    ///
    /// Configuration errors report their status code, provider errors the
    /// provider's own code.
    pub fn code(&self) -> Option<String> {
        match self {
            Self::Configuration { status_code, .. } => Some(status_code.to_string()),
            Self::Provider { code, .. } => code.clone(),
            _ => None,
        }
    }

    /// The normalized provider failure, when the error came from a provider
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider { provider_error, .. } => Some(provider_error),
            _ => None,
        }
    }

    /// Whether the error was raised before any request was attempted
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::UnknownService { .. }
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}
