//! Movie submission rules.

use chrono::{Datelike, Utc};

use crate::runtime::Runtime;
use crate::validate::{is_unique, Validator};

/// Year of the earliest surviving motion picture; no movie predates it.
pub const EARLIEST_YEAR: i32 = 1888;

/// Longest accepted title, in bytes.
pub const MAX_TITLE_BYTES: usize = 500;

/// Most genres a movie may carry.
pub const MAX_GENRES: usize = 5;

/// Accepted `sort` values for movie listings. Titles sort ascending only.
pub const SORT_SAFELIST: &[&str] =
    &["id", "title", "year", "runtime", "-id", "-year", "-runtime"];

/// Run every movie submission rule, recording failures on `v`.
///
/// `runtime` and `genres` are `None` when the field was absent from the
/// submission; absence fails the same "must be provided" rules as zero
/// values do.
pub fn validate_movie(
    v: &mut Validator,
    title: &str,
    year: i32,
    runtime: Option<Runtime>,
    genres: Option<&[String]>,
) {
    v.check(!title.is_empty(), "title", "must be provided");
    v.check(
        title.len() <= MAX_TITLE_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(year != 0, "year", "must be provided");
    v.check(year >= EARLIEST_YEAR, "year", "must be greater than 1888");
    v.check(
        year <= Utc::now().year(),
        "year",
        "must not be in the future",
    );

    let minutes = runtime.unwrap_or_default().minutes();
    v.check(minutes != 0, "runtime", "must be provided");
    v.check(minutes > 0, "runtime", "must be a positive integer");

    v.check(genres.is_some(), "genres", "must be provided");
    let genres = genres.unwrap_or_default();
    v.check(!genres.is_empty(), "genres", "must contain at least 1 genre");
    v.check(
        genres.len() <= MAX_GENRES,
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(
        is_unique(genres),
        "genres",
        "must not contain duplicate values",
    );
}
