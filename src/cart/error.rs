//! Cart error types
//!
//! [`StoreError`] is what the store reports; [`ApiError`] is what a handler
//! turns into an HTTP response (status plus a plain-text description).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors reported by [`CartStore`](super::state::CartStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no product stored under '{0}'")]
    NotFound(String),
}

/// Errors a handler answers with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Malformed path or unknown id (404, empty body).
    #[error("not found")]
    NotFound,

    /// Body could not be decoded (400).
    #[error("{0}")]
    BadRequest(String),

    /// Body was not declared as JSON (415).
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Serialization failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text written to the response body. Not-found answers carry none.
    pub fn body(&self) -> String {
        match self {
            ApiError::NotFound => String::new(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.body()).into_response()
    }
}
