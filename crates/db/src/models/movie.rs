//! Movie row model and submission DTO.

use reeldex_core::runtime::Runtime;
use reeldex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A movie row from the `movies` table.
///
/// `created_at` is internal bookkeeping and never serialized. `runtime`
/// crosses the wire as the string `"<minutes> mins"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Vec<String>,
    pub version: i32,
}

// Mapped by hand so the integer `runtime` column lands in the newtype.
impl FromRow<'_, PgRow> for Movie {
    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Movie {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
            title: row.try_get("title")?,
            year: row.try_get("year")?,
            runtime: Runtime::new(row.try_get("runtime")?),
            genres: row.try_get("genres")?,
            version: row.try_get("version")?,
        })
    }
}

/// Submission payload for creating or fully replacing a movie.
///
/// Unknown keys are rejected at the serde level. Absent fields decode to
/// zero values (`None` for runtime and genres) and are caught by the
/// validator, not by serde, so every missing field is reported together.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub runtime: Option<Runtime>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

impl MovieInput {
    /// Runtime in minutes, zero when the field was absent.
    pub fn runtime_minutes(&self) -> i32 {
        self.runtime.unwrap_or_default().minutes()
    }

    /// Genres as a slice, empty when the field was absent.
    pub fn genre_list(&self) -> &[String] {
        self.genres.as_deref().unwrap_or_default()
    }
}
