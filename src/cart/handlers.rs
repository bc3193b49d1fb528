//! REST API handlers for cart operations
//!
//! This module implements the five HTTP endpoints over the product store.
//! Create and update keep running after declaring a content-type or body
//! error: the first declared error decides the status, every declared
//! message is written, and the store is still mutated with whatever was
//! decoded.

use super::{error::ApiError, helpers::*, models::*, state::SharedState};
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tracing::warn;

/// Segment count of `/cart/{id}`
const GET_SEGMENTS: usize = 3;
/// Segment count of `/cart/remove/{id}` and `/carts/update/{id}`
const MUTATE_SEGMENTS: usize = 4;

/// Creates routes for cart-related operations
///
/// Methods a path does not serve answer 404, the same as a malformed path.
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(list_products).fallback(not_found))
        .route("/cart/post", post(create_product).fallback(not_found))
        .route("/cart/:id", get(get_product).fallback(not_found))
        .route(
            "/cart/remove/:id",
            post(delete_product).put(delete_product).fallback(not_found),
        )
        .route(
            "/carts/update/:id",
            post(update_product).put(update_product).fallback(not_found),
        )
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Errors a handler has answered with but kept running past.
#[derive(Debug, Default)]
struct DeclaredErrors(Vec<ApiError>);

impl DeclaredErrors {
    fn record<T>(&mut self, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(status = %err.status(), error = %err, "declared error, continuing");
                self.0.push(err);
                None
            }
        }
    }
}

impl IntoResponse for DeclaredErrors {
    /// 200 with an empty body when nothing was declared.
    fn into_response(self) -> Response {
        let Some(first) = self.0.first() else {
            return StatusCode::OK.into_response();
        };
        let body: String = self.0.iter().map(ApiError::body).collect();
        (first.status(), body).into_response()
    }
}

/// Endpoint: GET /cart
/// Returns every stored product as a JSON array.
async fn list_products(State(state): State<SharedState>) -> Result<Response, ApiError> {
    json_response(&state.store.list())
}

/// Endpoint: GET /cart/{id}
async fn get_product(State(state): State<SharedState>, uri: Uri) -> Result<Response, ApiError> {
    let id = id_from_path(request_target(&uri), GET_SEGMENTS).ok_or(ApiError::NotFound)?;
    let product = state.store.get(id)?;
    json_response(&product)
}

/// Endpoint: POST /cart/post
/// Stores the body under a fresh id. The new id is not returned.
async fn create_product(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let mut declared = DeclaredErrors::default();
    declared.record(check_content_type(&headers));
    let product = declared.record(decode_product(&body)).unwrap_or_default();

    state.store.insert(product);

    declared.into_response()
}

/// Endpoint: POST|PUT /carts/update/{id}
/// Overwrites both fields of the record stored under the path id.
async fn update_product(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(id) = id_from_path(request_target(&uri), MUTATE_SEGMENTS) else {
        return ApiError::NotFound.into_response();
    };

    let mut declared = DeclaredErrors::default();
    declared.record(check_content_type(&headers));
    let fields = declared.record(decode_product(&body)).unwrap_or_default();
    declared.record(state.store.update(id, fields).map_err(ApiError::from));

    declared.into_response()
}

/// Endpoint: POST|PUT /cart/remove/{id}
async fn delete_product(State(state): State<SharedState>, uri: Uri) -> Result<Response, ApiError> {
    let id = id_from_path(request_target(&uri), MUTATE_SEGMENTS).ok_or(ApiError::NotFound)?;
    state.store.delete(id)?;

    Ok(([(CONTENT_TYPE, JSON_CONTENT_TYPE)], DELETE_SUCCESS_MESSAGE).into_response())
}
