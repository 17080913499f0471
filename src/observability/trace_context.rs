//! Per-request trace context.
//!
//! # Responsibilities
//! - Adopt the trace id of an incoming W3C `traceparent` header
//! - Otherwise start a new trace
//! - Open a `request` span for the handler
//! - Stamp `X-Trace-Id` / `X-Span-Id` on every response

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use rand::Rng;
use tracing::Instrument;

pub const TRACE_ID_HEADER: &str = "x-trace-id";
pub const SPAN_ID_HEADER: &str = "x-span-id";
const TRACEPARENT_HEADER: &str = "traceparent";

/// Trace and span identifiers assigned to one inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// 32 lowercase hex digits.
    pub trace_id: String,
    /// 16 lowercase hex digits.
    pub span_id: String,
}

impl TraceContext {
    /// Continue the caller's trace when it sent a valid `traceparent`,
    /// otherwise start a new one. The span id is always fresh.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let trace_id = headers
            .get(TRACEPARENT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_traceparent)
            .unwrap_or_else(new_trace_id);

        Self {
            trace_id,
            span_id: new_span_id(),
        }
    }
}

fn is_lower_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Extract the trace id from `version-traceid-parentid-flags`.
fn parse_traceparent(value: &str) -> Option<String> {
    let mut parts = value.trim().split('-');
    let version = parts.next()?;
    let trace_id = parts.next()?;
    let parent_id = parts.next()?;
    let flags = parts.next()?;

    if !is_lower_hex(version, 2) || version == "ff" {
        return None;
    }
    // Version 00 has exactly four fields; later versions may append more.
    if version == "00" && parts.next().is_some() {
        return None;
    }
    if !is_lower_hex(trace_id, 32) || !is_lower_hex(parent_id, 16) || !is_lower_hex(flags, 2) {
        return None;
    }
    if trace_id.bytes().all(|b| b == b'0') || parent_id.bytes().all(|b| b == b'0') {
        return None;
    }

    Some(trace_id.to_string())
}

fn new_trace_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

fn new_span_id() -> String {
    format!("{:016x}", rand::thread_rng().gen_range(1..=u64::MAX))
}

/// Middleware running the rest of the stack inside a `request` span and
/// stamping the trace headers on the way out.
pub async fn inject_trace_headers(request: Request<Body>, next: Next) -> Response {
    let ctx = TraceContext::from_headers(request.headers());
    let span = tracing::info_span!(
        "request",
        trace_id = %ctx.trace_id,
        span_id = %ctx.span_id,
        method = %request.method(),
        path = %request.uri().path()
    );

    let mut response = next.run(request).instrument(span).await;

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&ctx.trace_id) {
        headers.insert(TRACE_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&ctx.span_id) {
        headers.insert(SPAN_ID_HEADER, value);
    }
    response
}
