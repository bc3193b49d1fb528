//! HTTP router: the cart routes plus request logging and CORS

use crate::cart::state::SharedState;
use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, Method},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Builds the application router around `state`.
pub fn create_app_router(state: SharedState) -> Router {
    Router::new()
        .merge(crate::cart::routes())
        .layer(middleware::from_fn(log_requests))
        .layer(cart_cors())
        .with_state(state)
}

/// Logs every request, and the status of those that did not succeed.
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!(%method, %uri, "request");

    let res = next.run(req).await;
    if !res.status().is_success() {
        warn!(%method, %uri, status = %res.status(), "request failed");
    }
    res
}

/// Any origin may call the cart endpoints with the methods they serve.
fn cart_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
}
