//! Remote API health checking with uniform outcome classification.
//!
//! One GET to the health endpoint, bound by the configured client-side
//! timeout. Every outcome - success, HTTP error, timeout, transport failure,
//! unreadable body - comes back as a [`StatusReport`] value carrying the
//! elapsed time and a human-readable message, never as an `Err`, so callers
//! render all outcomes the same way.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::http;

/// Path of the health endpoint, relative to the configured base URL.
pub const PING_PATH: &str = "/api/v1/ping";

/// Classified outcome of a single health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// 2xx response with a JSON body.
    Success,
    /// The server answered with a non-2xx status.
    HttpError,
    /// The client-side timeout elapsed and the request was aborted.
    Timeout,
    /// The request never completed (DNS, connection, TLS, I/O).
    NetworkError,
    /// The exchange succeeded but the body could not be read or parsed.
    Unknown,
}

impl CheckOutcome {
    /// Stable identifier used in the report JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckOutcome::Success => "success",
            CheckOutcome::HttpError => "http-error",
            CheckOutcome::Timeout => "timeout",
            CheckOutcome::NetworkError => "network-error",
            CheckOutcome::Unknown => "unknown-error",
        }
    }
}

/// Uniform result of one health check.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub outcome: CheckOutcome,
    /// HTTP status code, when the server answered at all.
    pub status: Option<u16>,
    /// Parsed response body on success.
    pub data: Option<Value>,
    /// Human-readable failure message.
    pub error: Option<String>,
    /// Elapsed time around the whole exchange.
    pub response_time_ms: u64,
    /// When the check started.
    pub timestamp: DateTime<Utc>,
}

impl StatusReport {
    pub fn success(&self) -> bool {
        self.outcome == CheckOutcome::Success
    }

    /// The report as a JSON value, shaped like the payload the status page
    /// renders: `success`, `outcome`, `status` (0 when the server never
    /// answered), optional `data`/`error`, `responseTime`, `timestamp`.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("success".into(), Value::Bool(self.success()));
        map.insert("outcome".into(), self.outcome.as_str().into());
        map.insert("status".into(), self.status.unwrap_or(0).into());
        if let Some(data) = &self.data {
            map.insert("data".into(), data.clone());
        }
        if let Some(error) = &self.error {
            map.insert("error".into(), error.as_str().into());
        }
        map.insert("responseTime".into(), self.response_time_ms.into());
        map.insert("timestamp".into(), self.timestamp.to_rfc3339().into());
        Value::Object(map)
    }
}

/// Run one health check against `<base_url>/api/v1/ping`.
///
/// Sends `X-API-Key` when a key is supplied. At most one request is in
/// flight; the configured timeout aborts it and yields a timeout-specific
/// message.
pub fn check(api: &ApiConfig, api_key: Option<&str>) -> StatusReport {
    let timestamp = Utc::now();
    let started = Instant::now();
    let url = ping_url(&api.base_url);

    let agent = http::agent(Duration::from_secs(api.timeout_secs));
    let mut request = agent
        .get(&url)
        .header("Content-Type", "application/json")
        .header("User-Agent", &api.user_agent);
    if let Some(key) = api_key {
        request = request.header("X-API-Key", key);
    }

    match request.call() {
        Ok(response) => {
            let code = response.status();
            if !code.is_success() {
                let reason = code.canonical_reason().unwrap_or("unknown status");
                return StatusReport {
                    outcome: CheckOutcome::HttpError,
                    status: Some(code.as_u16()),
                    data: None,
                    error: Some(format!("HTTP {}: {reason}", code.as_u16())),
                    response_time_ms: elapsed_ms(started),
                    timestamp,
                };
            }

            let body = response
                .into_body()
                .with_config()
                .limit(http::MAX_API_RESPONSE_SIZE)
                .read_to_string();
            let response_time_ms = elapsed_ms(started);

            let (outcome, data, error) = match body {
                Ok(text) => match serde_json::from_str::<Value>(&text) {
                    Ok(data) => (CheckOutcome::Success, Some(data), None),
                    Err(e) => (
                        CheckOutcome::Unknown,
                        None,
                        Some(format!("unexpected response body: {e}")),
                    ),
                },
                Err(e) => (
                    CheckOutcome::Unknown,
                    None,
                    Some(format!("failed to read response body: {e}")),
                ),
            };

            StatusReport {
                outcome,
                status: Some(code.as_u16()),
                data,
                error,
                response_time_ms,
                timestamp,
            }
        }
        Err(e) => {
            let (outcome, message) = classify_transport_error(&e, api.timeout_secs);
            log::debug!("health check transport failure: {e}");
            StatusReport {
                outcome,
                status: None,
                data: None,
                error: Some(message),
                response_time_ms: elapsed_ms(started),
                timestamp,
            }
        }
    }
}

/// Join the base URL and the ping path without doubling slashes.
pub fn ping_url(base_url: &str) -> String {
    format!("{}{PING_PATH}", base_url.trim_end_matches('/'))
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

fn classify_transport_error(err: &ureq::Error, timeout_secs: u64) -> (CheckOutcome, String) {
    match err {
        ureq::Error::Timeout(_) => (
            CheckOutcome::Timeout,
            format!("Request timeout ({timeout_secs} seconds)"),
        ),
        ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => (
            CheckOutcome::Timeout,
            format!("Request timeout ({timeout_secs} seconds)"),
        ),
        other => (CheckOutcome::NetworkError, other.to_string()),
    }
}
