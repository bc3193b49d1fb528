//! Cart Request Helpers
//!
//! Small, pure functions the handlers use to validate the request path,
//! the declared content type and the body.

use super::{error::ApiError, models::Product, models::JSON_CONTENT_TYPE};
use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, Uri},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Returns the id segment of `path` when it splits into exactly
/// `expected_segments` `/`-delimited parts.
///
/// The leading empty segment counts, so `/cart/Id1` has three parts.
///
/// ```
/// use cart_store_rust::cart::helpers::id_from_path;
///
/// assert_eq!(id_from_path("/cart/Id1", 3), Some("Id1"));
/// assert_eq!(id_from_path("/cart/a/b", 3), None);
/// ```
pub fn id_from_path(path: &str, expected_segments: usize) -> Option<&str> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() != expected_segments {
        return None;
    }
    parts.last().copied()
}

/// The path plus any query string, as received.
///
/// A query is part of the last segment, so `/cart/Id1?x=1` names the id
/// `Id1?x=1`.
pub fn request_target(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// Checks that the request declares exactly `application/json`.
pub fn check_content_type(headers: &HeaderMap) -> Result<(), ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if content_type == JSON_CONTENT_TYPE {
        Ok(())
    } else {
        Err(ApiError::UnsupportedMediaType(format!(
            "Need content type {} but got '{}'",
            JSON_CONTENT_TYPE, content_type
        )))
    }
}

/// Decodes a [`Product`] from a JSON body.
pub fn decode_product(body: &[u8]) -> Result<Product, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Serializes `value` into a 200 response tagged `application/json`.
pub fn json_response<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
}
