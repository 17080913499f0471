//! Outbound request/response logging.
//!
//! Observes upstream traffic without affecting it: nothing here can fail
//! the call it is logging.

use reqwest::header::HeaderMap;
use reqwest::{Request, StatusCode};

const EMPTY_BODY: &str = "(empty body)";

/// Log an upstream request just before it is sent.
pub fn log_request(request: &Request) {
    let body = request
        .body()
        .and_then(|b| b.as_bytes())
        .map(|bytes| format_body(&String::from_utf8_lossy(bytes)))
        .unwrap_or_else(|| EMPTY_BODY.to_string());

    tracing::info!(
        method = %request.method(),
        url = %request.url(),
        headers = ?request.headers(),
        body = %body,
        "Upstream request"
    );
}

/// Log an upstream response once its body has been read.
pub fn log_response(status: StatusCode, headers: &HeaderMap, body: &str) {
    tracing::info!(
        status = status.as_u16(),
        headers = ?headers,
        body = %format_body(body),
        "Upstream response"
    );
}

/// Pretty-print JSON bodies; anything else is returned verbatim.
pub fn format_body(raw: &str) -> String {
    if raw.is_empty() {
        return EMPTY_BODY.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}
