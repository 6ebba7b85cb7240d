//! Repository for the `movies` table.

use std::time::Duration;

use reeldex_core::filters::Filters;
use reeldex_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::movie::{Movie, MovieInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, title, year, runtime, genres, version";

/// Deadline for the filtered listing query.
const LIST_QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// The database assigns `id`, `created_at` and the initial `version`.
    pub async fn create(pool: &PgPool, input: &MovieInput) -> Result<Movie, DbError> {
        let query = format!(
            "INSERT INTO movies (title, year, runtime, genres)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.year)
            .bind(input.runtime_minutes())
            .bind(input.genre_list())
            .fetch_one(pool)
            .await?;
        Ok(movie)
    }

    /// Fetch a movie by id.
    ///
    /// Ids below 1 can never exist and resolve to `RecordNotFound` without
    /// touching the database.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Movie, DbError> {
        if id < 1 {
            return Err(DbError::RecordNotFound);
        }
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::RecordNotFound)
    }

    /// Replace every client-owned field of a movie, bumping its version.
    pub async fn update(pool: &PgPool, id: DbId, input: &MovieInput) -> Result<Movie, DbError> {
        let query = format!(
            "UPDATE movies
             SET title = $1, year = $2, runtime = $3, genres = $4, version = version + 1
             WHERE id = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.year)
            .bind(input.runtime_minutes())
            .bind(input.genre_list())
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(DbError::RecordNotFound)
    }

    /// Delete a movie by id.
    ///
    /// Zero affected rows maps to `RecordNotFound`; a driver failure
    /// propagates as `DbError::Database` rather than masquerading as a
    /// missing row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        if id < 1 {
            return Err(DbError::RecordNotFound);
        }
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::RecordNotFound);
        }
        Ok(())
    }

    /// List movies matching `title` and `genres`, sorted and windowed per
    /// `filters`.
    ///
    /// An empty `title` or `genres` disables that filter. Title matching is
    /// full-text over the `simple` configuration; genre matching is array
    /// containment. Callers must have validated `filters` first (the sort
    /// accessors panic on a safelist miss). The query runs under a deadline
    /// so a pathological search cannot hold a pool connection indefinitely.
    pub async fn list(
        pool: &PgPool,
        title: &str,
        genres: &[String],
        filters: &Filters,
    ) -> Result<Vec<Movie>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE (to_tsvector('simple', title) @@ plainto_tsquery('simple', $1) OR $1 = '')
               AND (genres @> $2 OR $2 = '{{}}')
             ORDER BY {} {}, id ASC
             LIMIT $3 OFFSET $4",
            filters.sort_column(),
            filters.sort_direction()
        );
        let rows = sqlx::query_as::<_, Movie>(&query)
            .bind(title)
            .bind(genres)
            .bind(filters.limit())
            .bind(filters.offset())
            .fetch_all(pool);
        match tokio::time::timeout(LIST_QUERY_TIMEOUT, rows).await {
            Ok(result) => Ok(result?),
            Err(elapsed) => {
                tracing::warn!(
                    timeout_secs = LIST_QUERY_TIMEOUT.as_secs(),
                    "movie list query timed out"
                );
                Err(DbError::Timeout(elapsed))
            }
        }
    }
}
