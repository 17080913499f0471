//! Query-driven post filtering.
//!
//! # Design Decisions
//! - Each supplied predicate narrows the previous result (AND)
//! - Absent predicates impose no constraint
//! - Stable: survivors keep their input order
//! - Substring matches are case-sensitive

use serde::Deserialize;

use crate::posts::types::Post;

/// Optional filters accepted by the post list endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    pub user_id: Option<i32>,
    pub id: Option<i32>,
    pub title_like: Option<String>,
    pub body_like: Option<String>,
}

/// Apply `query` to `posts`, returning the surviving posts as a new Vec.
pub fn filter_posts(posts: &[Post], query: &PostQuery) -> Vec<Post> {
    let mut matched = posts.to_vec();

    if let Some(user_id) = query.user_id {
        matched.retain(|post| post.user_id == user_id);
    }
    if let Some(id) = query.id {
        matched.retain(|post| post.id == id);
    }
    if let Some(title) = query.title_like.as_deref() {
        matched.retain(|post| post.title.contains(title));
    }
    if let Some(body) = query.body_like.as_deref() {
        matched.retain(|post| post.body.contains(body));
    }

    matched
}
