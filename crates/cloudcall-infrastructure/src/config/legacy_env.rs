//! Legacy environment keys
//!
//! Unprefixed variables that deployment tooling has always honored. They are
//! applied after figment extraction, so they override both the TOML file and
//! `CLOUDCALL__*` variables.
//!
//! | Setting | Keys (first non-empty wins) |
//! |---------|-----------------------------|
//! | Proxy | `proxy`, `HTTP_PROXY`, `http_proxy`, `HTTPS_PROXY`, `https_proxy` |
//! | Inline CAs | `ca`, `HTTPS_CA`, `https_ca` |
//! | CA files | `cafile`, `HTTPS_CAFILE`, `https_cafile` |
//! | Timeout | `AWS_CLIENT_TIMEOUT`, `aws_client_timeout` |
//! | Max retries | `SLS_AWS_REQUEST_MAX_RETRIES` |

use std::path::PathBuf;

use tracing::warn;

use crate::config::AppConfig;
use crate::constants::{
    ENV_CA_KEYS, ENV_CAFILE_KEYS, ENV_MAX_RETRIES_KEY, ENV_PROXY_KEYS, ENV_TIMEOUT_KEYS,
    LIST_SEPARATOR,
};

/// Apply legacy variables found through `lookup` to `config`
///
/// `lookup` is usually `|key| std::env::var(key).ok()`; tests pass a map.
pub fn apply_legacy_env<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let first = |keys: &[&str]| {
        keys.iter()
            .find_map(|key| lookup(key).filter(|value| !value.is_empty()))
    };

    if let Some(proxy) = first(ENV_PROXY_KEYS) {
        config.transport.proxy = Some(proxy);
    }

    if let Some(ca) = first(ENV_CA_KEYS) {
        config.transport.ca = split_inline_certificates(&ca);
    }

    if let Some(cafile) = first(ENV_CAFILE_KEYS) {
        config.transport.cafile = split_paths(&cafile);
    }

    if let Some(timeout) = first(ENV_TIMEOUT_KEYS) {
        match parse_leading_integer(&timeout) {
            Some(ms) => config.transport.timeout_ms = ms,
            None => warn!(value = %timeout, "Ignoring non-numeric client timeout"),
        }
    }

    if let Some(retries) = lookup(ENV_MAX_RETRIES_KEY) {
        match retries.trim().parse::<u32>() {
            Ok(max_retries) => config.request.max_retries = max_retries,
            Err(_) => warn!(
                value = %retries,
                key = ENV_MAX_RETRIES_KEY,
                "Ignoring invalid max retries, keeping {}",
                config.request.max_retries
            ),
        }
    }
}

/// Split comma-separated PEM strings, expanding literal `\n` escapes
pub fn split_inline_certificates(value: &str) -> Vec<String> {
    value
        .split(LIST_SEPARATOR)
        .map(|cert| cert.replace("\\n", "\n"))
        .collect()
}

/// Split comma-separated paths, trimming whitespace
pub fn split_paths(value: &str) -> Vec<PathBuf> {
    value
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Parse the leading decimal digits of `value` (`"30000ms"` gives 30000)
fn parse_leading_integer(value: &str) -> Option<u64> {
    let trimmed = value.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}
