//! Client for the upstream posts/comments API.
//!
//! # Responsibilities
//! - Issue the three upstream GETs (posts, post by id, comments by post)
//! - Decode JSON payloads into [`Post`] / [`Comment`]
//! - Translate transport and HTTP failures into [`ApiError`]
//!
//! # Error Mapping
//! ```text
//! list_posts               any failure        → 500, detail from failure
//! get_post / comments      upstream 404       → 404, fixed detail
//!                          other 4xx / 5xx    → that status, "{code} {message}"
//!                          1xx / 3xx          → 500, "{code} {message}"
//!                          transport / decode → 500
//! ```
//!
//! Callers of the list endpoint never see the upstream's own status code.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::Instrument;

use crate::config::UpstreamConfig;
use crate::error::{ApiError, ApiResult};
use crate::observability::metrics;
use crate::posts::{attach_comments, Comment, Post};
use crate::upstream::logging;

const RESOURCE_POSTS: &str = "posts";
const RESOURCE_COMMENTS: &str = "comments";

pub const CLIENT_HEADER: &str = "x-client";
pub const CLIENT_HEADER_VALUE: &str = concat!("post-relay/", env!("CARGO_PKG_VERSION"));

/// Failure of a single upstream round-trip, before it is mapped to an
/// [`ApiError`] by the calling operation.
#[derive(Debug, Error)]
enum FetchError {
    #[error("{} {message}", .status.as_u16())]
    Status { status: StatusCode, message: String },

    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid upstream payload: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Mapping used by the list endpoint: every failure is a 500.
    fn into_list_error(self) -> ApiError {
        let detail = self.to_string();
        ApiError::upstream(StatusCode::INTERNAL_SERVER_ERROR, detail).with_source(self)
    }

    /// Mapping used by single-resource lookups: 404 gets `not_found_detail`,
    /// other error statuses are passed through. Informational and redirect
    /// statuses are not valid problem statuses and become 500.
    fn into_lookup_error(self, not_found_detail: String) -> ApiError {
        let detail = self.to_string();
        match self {
            FetchError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
                ApiError::not_found(not_found_detail)
            }
            FetchError::Status { status, .. }
                if status.is_client_error() || status.is_server_error() =>
            {
                ApiError::upstream(status, detail)
            }
            FetchError::Status { .. } => {
                ApiError::upstream(StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
            other => ApiError::upstream(StatusCode::INTERNAL_SERVER_ERROR, detail).with_source(other),
        }
    }
}

/// Message reported for a non-success upstream response: the trimmed body,
/// or the canonical reason phrase when the body is empty.
fn upstream_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("Unknown Status").to_string()
    } else {
        body.to_string()
    }
}

/// Headers attached to every upstream request.
fn outbound_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CLIENT_HEADER, HeaderValue::from_static(CLIENT_HEADER_VALUE));
    headers
}

/// Upstream API client.
///
/// Holds only the injected transport and the base URL. Cloning is cheap;
/// the transport shares its connection pool between clones.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client for the upstream described by `config`.
    pub fn new(config: &UpstreamConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full post collection.
    pub async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let url = format!("{}/{RESOURCE_POSTS}", self.base_url);
        self.fetch("list_posts", url)
            .await
            .map_err(FetchError::into_list_error)
    }

    /// Fetch one post. `id` is forwarded exactly as given.
    pub async fn get_post(&self, id: &str) -> ApiResult<Post> {
        let url = format!("{}/{RESOURCE_POSTS}/{id}", self.base_url);
        self.fetch("get_post", url)
            .await
            .map_err(|e| e.into_lookup_error(format!("Cannot find a Post with id {id}")))
    }

    /// Fetch the comments of one post.
    pub async fn list_comments_for_post(&self, post_id: &str) -> ApiResult<Vec<Comment>> {
        let url = format!("{}/{RESOURCE_POSTS}/{post_id}/{RESOURCE_COMMENTS}", self.base_url);
        self.fetch("list_comments", url).await.map_err(|e| {
            e.into_lookup_error(format!("Cannot find comments for a Post with id {post_id}"))
        })
    }

    /// Fetch a post and attach its comments.
    ///
    /// Comments are fetched first, then the post. Either failure aborts the
    /// whole call; there is no partial result.
    pub async fn get_post_with_comments(&self, post_id: &str) -> ApiResult<Post> {
        let comments = self.list_comments_for_post(post_id).await?;
        let post = self.get_post(post_id).await?;
        Ok(attach_comments(post, comments))
    }

    /// One upstream GET inside its own span.
    async fn fetch<T: DeserializeOwned>(&self, endpoint: &'static str, url: String) -> Result<T, FetchError> {
        let span = tracing::info_span!("upstream_call", endpoint, url = %url);
        async move {
            let request = self
                .http
                .get(&url)
                .headers(outbound_headers())
                .build()
                .map_err(FetchError::Transport)?;
            logging::log_request(&request);

            let start = Instant::now();
            let response = match self.http.execute(request).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "Upstream unreachable");
                    metrics::record_upstream_call(endpoint, "transport_error", start);
                    return Err(FetchError::Transport(e));
                }
            };

            let status = response.status();
            let headers = response.headers().clone();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::error!(status = status.as_u16(), error = %e, "Upstream body read failed");
                    metrics::record_upstream_call(endpoint, "body_error", start);
                    return Err(FetchError::Transport(e));
                }
            };
            logging::log_response(status, &headers, &body);
            metrics::record_upstream_call(endpoint, status.as_str(), start);

            if !status.is_success() {
                return Err(FetchError::Status {
                    status,
                    message: upstream_message(status, &body),
                });
            }

            serde_json::from_str(&body).map_err(FetchError::Decode)
        }
        .instrument(span)
        .await
    }
}
