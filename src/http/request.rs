//! Inbound parameter validation.
//!
//! # Responsibilities
//! - Reject non-numeric post ids before any upstream call
//! - Turn malformed list query strings into problem responses
//!
//! # Design Decisions
//! - A valid id is forwarded in its original string form, not re-rendered
//!   from the parsed integer

use axum::extract::{rejection::QueryRejection, Query};

use crate::error::{ApiError, ApiResult};
use crate::posts::PostQuery;

/// Check that `raw` parses as an integer and hand it back unchanged.
pub fn validate_post_id(raw: &str) -> ApiResult<&str> {
    match raw.parse::<i32>() {
        Ok(_) => Ok(raw),
        Err(e) => Err(ApiError::bad_request(format!(
            "Invalid postId: {raw}, Invalid number {e}"
        ))),
    }
}

/// Unwrap the list query, mapping extractor rejections to `BadRequest`.
pub fn post_query(query: Result<Query<PostQuery>, QueryRejection>) -> ApiResult<PostQuery> {
    query
        .map(|Query(q)| q)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, Uri};

    #[test]
    fn numeric_ids_pass_through_verbatim() {
        assert_eq!(validate_post_id("11").unwrap(), "11");
        assert_eq!(validate_post_id("007").unwrap(), "007");
        assert_eq!(validate_post_id("+5").unwrap(), "+5");
    }

    #[test]
    fn non_numeric_id_is_bad_request() {
        let err = validate_post_id("xxxxx").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.title(), "Bad Request");
        assert_eq!(
            err.detail(),
            "Invalid postId: xxxxx, Invalid number invalid digit found in string"
        );
    }

    #[test]
    fn empty_id_is_bad_request() {
        let err = validate_post_id("").unwrap_err();
        assert!(err.detail().starts_with("Invalid postId: , Invalid number "));
    }

    #[test]
    fn overflowing_id_is_bad_request() {
        let err = validate_post_id("99999999999999999999").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = validate_post_id("2147483648").unwrap_err();
        assert_eq!(
            err.detail(),
            "Invalid postId: 2147483648, Invalid number number too large to fit in target type"
        );
        assert_eq!(validate_post_id("2147483647").unwrap(), "2147483647");
    }

    #[test]
    fn query_rejection_becomes_bad_request() {
        let uri: Uri = "/posts?userId=abc".parse().unwrap();
        let err = post_query(Query::try_from_uri(&uri)).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let uri: Uri = "/posts?userId=1&bodyLike=est".parse().unwrap();
        let query = post_query(Query::try_from_uri(&uri)).unwrap();
        assert_eq!(query.user_id, Some(1));
        assert_eq!(query.body_like.as_deref(), Some("est"));

        let uri: Uri = "/posts?userId=3000000000".parse().unwrap();
        let err = post_query(Query::try_from_uri(&uri)).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
