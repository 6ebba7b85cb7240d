//! Handlers for the `/movies` resource.

use axum::extract::{FromRequest, Path, Query, Request, State};
use axum::Json;
use reeldex_core::filters::Filters;
use reeldex_core::movie::{validate_movie, SORT_SAFELIST};
use reeldex_core::types::DbId;
use reeldex_core::validate::Validator;
use reeldex_db::models::movie::MovieInput;
use reeldex_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::json::StrictJson;
use crate::query::{read_csv, read_int, read_string};
use crate::response::{MessageResponse, MovieListResponse, MovieResponse};
use crate::state::AppState;

/// Parse a path id. Anything non-numeric, or below 1, gets the canonical
/// rejection; the two cases are indistinguishable to the client.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    match raw.parse::<DbId>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(AppError::BadRequest("invalid id provided".to_string())),
    }
}

/// Run the submission rules, converting failures into a 422.
fn validate_input(input: &MovieInput) -> Result<(), AppError> {
    let mut v = Validator::new();
    validate_movie(
        &mut v,
        &input.title,
        input.year,
        input.runtime,
        input.genres.as_deref(),
    );
    if v.is_valid() {
        Ok(())
    } else {
        Err(AppError::Validation(v.into_errors()))
    }
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    StrictJson(input): StrictJson<MovieInput>,
) -> AppResult<Json<MovieResponse>> {
    validate_input(&input)?;

    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");

    Ok(Json(MovieResponse { movie }))
}

/// GET /api/v1/movies/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MovieResponse>> {
    let id = parse_id(&id)?;
    let movie = MovieRepo::get(&state.pool, id).await?;
    Ok(Json(MovieResponse { movie }))
}

/// PUT /api/v1/movies/{id}
///
/// Full replacement: every client-owned field is overwritten with the
/// submitted value. The movie is fetched before the body is touched so an
/// unknown id reports 404 even when the body is also defective.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    req: Request,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    MovieRepo::get(&state.pool, id).await?;

    let StrictJson(input) = StrictJson::<MovieInput>::from_request(req, &()).await?;
    validate_input(&input)?;

    let movie = MovieRepo::update(&state.pool, id, &input).await?;
    tracing::info!(movie_id = movie.id, version = movie.version, "Movie updated");

    Ok(Json(MessageResponse {
        message: "movie updated successfully",
    }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    MovieRepo::delete(&state.pool, id).await?;
    tracing::info!(movie_id = id, "Movie deleted");

    Ok(Json(MessageResponse {
        message: "movie deleted successfully",
    }))
}

/// GET /api/v1/movies
///
/// Filters: `title` (full-text), `genres` (comma-separated, containment),
/// `page`, `page_size` and `sort` with defaults `1`, `20`, `id`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<MovieListResponse>> {
    let mut v = Validator::new();

    let title = read_string(&params, "title", "");
    let genres = read_csv(&params, "genres");
    let filters = Filters {
        page: read_int(&params, "page", 1, &mut v),
        page_size: read_int(&params, "page_size", 20, &mut v),
        sort: read_string(&params, "sort", "id"),
        sort_safelist: SORT_SAFELIST,
    };

    filters.validate(&mut v);
    if !v.is_valid() {
        return Err(AppError::Validation(v.into_errors()));
    }

    let movies = MovieRepo::list(&state.pool, &title, &genres, &filters).await?;
    Ok(Json(MovieListResponse { movies }))
}
