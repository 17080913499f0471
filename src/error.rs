//! Request-level error taxonomy.
//!
//! # Responsibilities
//! - Carry the status code and human-readable detail of a failed request
//! - Render failures as `application/problem+json` bodies
//!
//! # Design Decisions
//! - One tagged enum for the whole request path; handlers return
//!   `ApiResult<T>` and propagate with `?`
//! - `BadRequest` never involves an upstream call
//! - `Upstream` keeps whichever status the caller chose (the upstream's own
//!   status for single-resource lookups, 500 for list failures)

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const TITLE_BAD_REQUEST: &str = "Bad Request";
pub const TITLE_NOT_FOUND: &str = "Resource Not Found";
pub const TITLE_UPSTREAM: &str = "API Error Occurred";

const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Result alias used by the upstream client and the request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// A terminal request failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed input detected before any upstream call.
    #[error("{detail}")]
    BadRequest { detail: String },

    /// The upstream reported that the resource does not exist.
    #[error("{detail}")]
    NotFound { detail: String },

    /// Any other upstream outcome: non-success status, transport failure,
    /// or an undecodable payload.
    #[error("{detail}")]
    Upstream {
        status: StatusCode,
        detail: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest {
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn upstream(status: StatusCode, detail: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            detail: detail.into(),
            source: None,
        }
    }

    /// Attach the underlying cause to an `Upstream` error.
    pub fn with_source(self, err: impl std::error::Error + Send + Sync + 'static) -> Self {
        match self {
            Self::Upstream { status, detail, .. } => Self::Upstream {
                status,
                detail,
                source: Some(Box::new(err)),
            },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } => *status,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => TITLE_BAD_REQUEST,
            Self::NotFound { .. } => TITLE_NOT_FOUND,
            Self::Upstream { .. } => TITLE_UPSTREAM,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            Self::BadRequest { detail }
            | Self::NotFound { detail }
            | Self::Upstream { detail, .. } => detail,
        }
    }
}

/// RFC 7807 problem document.
#[derive(Debug, Serialize)]
pub struct ProblemDetail<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'a str,
    pub status: u16,
    pub detail: &'a str,
}

impl<'a> ProblemDetail<'a> {
    pub fn new(status: StatusCode, title: &'a str, detail: &'a str) -> Self {
        Self {
            kind: "about:blank",
            title,
            status: status.as_u16(),
            detail,
        }
    }

    /// Render as a response with the problem content type.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                detail = %self.detail(),
                source = ?std::error::Error::source(&self).map(|e| e.to_string()),
                "Request failed"
            );
        } else {
            tracing::warn!(
                status = status.as_u16(),
                detail = %self.detail(),
                "Request rejected"
            );
        }

        ProblemDetail::new(status, self.title(), self.detail()).into_response_with(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn statuses_and_titles() {
        let err = ApiError::bad_request("Invalid postId: x");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.title(), "Bad Request");

        let err = ApiError::not_found("Cannot find a Post with id 11");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.title(), "Resource Not Found");
        assert_eq!(err.to_string(), "Cannot find a Post with id 11");

        let err = ApiError::upstream(StatusCode::SERVICE_UNAVAILABLE, "503 Service Unavailable");
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.title(), "API Error Occurred");
    }

    #[test]
    fn with_source_only_applies_to_upstream() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = ApiError::upstream(StatusCode::INTERNAL_SERVER_ERROR, "failed").with_source(io);
        assert!(std::error::Error::source(&err).is_some());

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = ApiError::not_found("gone").with_source(io);
        assert!(std::error::Error::source(&err).is_none());
    }

    #[tokio::test]
    async fn renders_problem_body() {
        let response =
            ApiError::upstream(StatusCode::INTERNAL_SERVER_ERROR, "500 Unknown Error Occurred")
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );

        let body = body_json(response).await;
        assert_eq!(body["type"], "about:blank");
        assert_eq!(body["title"], "API Error Occurred");
        assert_eq!(body["status"], 500);
        assert_eq!(body["detail"], "500 Unknown Error Occurred");
    }
}
