//! Shared response envelope types for API handlers.
//!
//! Every success body wraps its payload under a named key so responses read
//! unambiguously at the client: `{"movie": ...}`, `{"movies": [...]}` or
//! `{"message": "..."}`. Use these instead of ad-hoc
//! `serde_json::json!(...)` to get compile-time type safety.

use reeldex_db::models::movie::Movie;
use serde::Serialize;

/// `{ "movie": { ... } }` envelope for single-movie responses.
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub movie: Movie,
}

/// `{ "movies": [ ... ] }` envelope for listings. An empty result is an
/// empty array, never null.
#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
}

/// `{ "message": "..." }` envelope for mutation acknowledgements.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
