//! HTTP client helper with native-tls support.
//!
//! Provides a configured agent that uses native-tls for TLS connections,
//! which works better in VM environments where ring/rustls may have issues.
//! All outbound requests in this crate go through [`agent`].

use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

/// Maximum response body size for API responses (1 MB).
///
/// The health endpoint returns a handful of bytes; anything near this limit
/// is a misbehaving server, not a payload we want to buffer.
pub const MAX_API_RESPONSE_SIZE: u64 = 1024 * 1024;

/// Create a new HTTP agent with native-tls, platform root certificates, and
/// the given global timeout.
///
/// HTTP status errors are disabled so non-2xx responses come back as values;
/// the status checker classifies them instead of treating them as transport
/// failures.
pub fn agent(timeout: Duration) -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Validate that a configured base URL is usable for API requests.
///
/// Enforces an http/https scheme and a non-empty host. Returns `Ok(())` or an
/// error string describing why the URL was rejected.
pub fn validate_base_url(base_url: &str) -> Result<(), String> {
    let parsed =
        url::Url::parse(base_url).map_err(|e| format!("invalid URL '{base_url}': {e}"))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "unsupported URL scheme '{scheme}' in '{base_url}'; only http and https are allowed"
            ));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(format!("URL '{base_url}' has no host"));
    }

    Ok(())
}
