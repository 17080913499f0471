//! Post and comment payload types.
//!
//! Field names follow the upstream JSON (camelCase). These types are used
//! both to decode upstream responses and to encode our own responses.

use serde::{Deserialize, Serialize};

/// A post as returned by the upstream API.
///
/// `comments` is never read from upstream payloads; it is only ever set by
/// [`attach_comments`](crate::posts::attach_comments) and is omitted from
/// the JSON output when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i32,
    pub id: i32,
    pub title: String,
    pub body: String,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

/// A comment belonging to exactly one post via `post_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: i32,
    pub id: i32,
    pub name: String,
    pub email: String,
    pub body: String,
}
