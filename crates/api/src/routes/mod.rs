//! Route registration.
//!
//! Resource routers are nested under `/api/v1`; the health endpoint is
//! mounted at the root. Unknown paths fall through to a JSON 404 and known
//! paths with unsupported methods to a JSON 405, so the error envelope
//! stays uniform across the API.

use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::Router;

use crate::error::AppError;
use crate::json::MAX_BODY_BYTES;
use crate::state::AppState;

pub mod health;
pub mod movies;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}

/// Assemble the application router over `state`.
///
/// Includes everything the API contract depends on: routes, the fallback
/// handlers and the request body cap. Operational middleware (tracing,
/// timeouts, request ids, panic recovery) is layered on by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1", api_routes())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for matched paths whose method has no handler.
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method)
}
