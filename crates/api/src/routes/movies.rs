//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::routes::method_not_allowed;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> show
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(movies::list)
                .post(movies::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/{id}",
            get(movies::show)
                .put(movies::update)
                .delete(movies::delete)
                .fallback(method_not_allowed),
        )
}
