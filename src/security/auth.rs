//! HTTP Basic authentication gate.
//!
//! Only the health and info endpoints are reachable without credentials.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::SecurityConfig;
use crate::error::ProblemDetail;

/// Paths served without authentication.
pub const PUBLIC_PATHS: [&str; 2] = ["/actuator/health", "/actuator/info"];

const UNAUTHORIZED_DETAIL: &str = "Full authentication is required to access this resource";

/// Credentials and challenge derived from [`SecurityConfig`].
#[derive(Debug, Clone)]
pub struct BasicAuth {
    enabled: bool,
    username: String,
    password: String,
    challenge: HeaderValue,
}

impl BasicAuth {
    pub fn from_config(config: &SecurityConfig) -> Self {
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{}\"", config.realm))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic"));

        Self {
            enabled: config.enabled,
            username: config.username.clone(),
            password: config.password.clone(),
            challenge,
        }
    }

    pub fn is_public(path: &str) -> bool {
        PUBLIC_PATHS.contains(&path)
    }

    /// True when `headers` carry the configured credentials.
    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(decode_basic)
            .is_some_and(|(user, pass)| user == self.username && pass == self.password)
    }
}

/// Decode `Basic <base64(user:pass)>`.
fn decode_basic(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

pub async fn basic_auth_middleware(
    State(auth): State<Arc<BasicAuth>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !auth.enabled
        || BasicAuth::is_public(request.uri().path())
        || auth.authorize(request.headers())
    {
        return next.run(request).await;
    }

    tracing::warn!(path = %request.uri().path(), "Rejected unauthenticated request");

    let mut response = ProblemDetail::new(StatusCode::UNAUTHORIZED, "Unauthorized", UNAUTHORIZED_DETAIL)
        .into_response_with(StatusCode::UNAUTHORIZED);
    response
        .headers_mut()
        .insert(header::WWW_AUTHENTICATE, auth.challenge.clone());
    response
}
