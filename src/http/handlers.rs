//! Request handlers for the exposed post/comment API.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::Uri,
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::http::request::{post_query, validate_post_id};
use crate::http::server::AppState;
use crate::posts::{filter_posts, Comment, Post, PostQuery};

/// `GET /posts?userId&id&titleLike&bodyLike`
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<PostQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Post>>> {
    let query = post_query(query)?;
    let posts = state.upstream.list_posts().await?;
    let filtered = filter_posts(&posts, &query);

    tracing::debug!(
        fetched = posts.len(),
        returned = filtered.len(),
        query = ?query,
        "Filtered posts"
    );
    Ok(Json(filtered))
}

/// `GET /posts/{postId}`
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Post>> {
    let post_id = validate_post_id(&post_id)?;
    let post = state.upstream.get_post(post_id).await?;
    Ok(Json(post))
}

/// `GET /posts/{postId}/comments`: the post with its comments attached.
pub async fn get_post_with_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Post>> {
    let post_id = validate_post_id(&post_id)?;
    let post = state.upstream.get_post_with_comments(post_id).await?;
    Ok(Json(post))
}

/// `GET /comments/{postId}`: the bare comment list.
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> ApiResult<Json<Vec<Comment>>> {
    let post_id = validate_post_id(&post_id)?;
    let comments = state.upstream.list_comments_for_post(post_id).await?;
    Ok(Json(comments))
}

/// Fallback for paths no route matches.
pub async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No resource at {}", uri.path()))
}
