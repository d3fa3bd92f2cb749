//! Provider error normalization
//!
//! Every raw failure from a service client passes through
//! [`normalize_provider_error`] before the retry policy sees it. Credential
//! failures are detected here and marked terminal so that neither the
//! retryable flag nor a 429 status can cause them to be retried.

use cloudcall_domain::constants::{
    CREDENTIALS_SETUP_URL, EC2_METADATA_PREFIX, MISSING_CREDENTIALS_PREFIX,
};
use cloudcall_domain::error::Error;
use cloudcall_domain::{ProviderError, RawProviderError};

/// Convert a raw provider failure into a domain error
///
/// The resulting error always carries the normalized [`ProviderError`].
pub fn normalize_provider_error(raw: RawProviderError) -> Error {
    let message = raw.display_message();

    if message.starts_with(MISSING_CREDENTIALS_PREFIX) {
        let message = credentials_error_message(&raw);
        return Error::provider(message, ProviderError::from_raw(raw).non_retryable());
    }

    Error::provider(message, ProviderError::from_raw(raw))
}

/// Message shown for a missing-credentials failure
///
/// When the credential chain fell through to the instance metadata lookup,
/// the user most likely has no credentials configured at all and gets a
/// pointer to the setup docs. Otherwise the credentials they configured were
/// rejected and the provider's own root message is more useful.
pub fn credentials_error_message(raw: &RawProviderError) -> String {
    let root = credentials_root_cause(raw);
    let root_message = root.display_message();
    if root_message.starts_with(EC2_METADATA_PREFIX) {
        format!(
            "AWS provider credentials not found. Learn how to set up AWS provider credentials \
             in our docs here: <{CREDENTIALS_SETUP_URL}>."
        )
    } else {
        root_message
    }
}

/// Walk `original_error` until an instance metadata failure or the bottom
fn credentials_root_cause(raw: &RawProviderError) -> &RawProviderError {
    raw.chain()
        .find(|e| e.original_error.is_none() || e.display_message().starts_with(EC2_METADATA_PREFIX))
        .unwrap_or(raw)
}
