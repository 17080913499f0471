//! Post/comment merge.

use crate::posts::types::{Comment, Post};

/// Return `post` with `comments` attached as-is.
///
/// No filtering or deduplication happens here; the comments are expected to
/// already belong to `post`.
pub fn attach_comments(post: Post, comments: Vec<Comment>) -> Post {
    Post {
        comments: Some(comments),
        ..post
    }
}
