//! Database-layer error type.

use thiserror::Error;

/// Failures surfaced by the repository layer.
///
/// `RecordNotFound` is a first-class variant so callers can map it to a 404
/// without inspecting driver internals; everything else is a real fault and
/// should be treated as one.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the requested id (or the id was out of range).
    #[error("record not found")]
    RecordNotFound,

    /// A statement exceeded its deadline.
    #[error("database query timed out")]
    Timeout(#[from] tokio::time::error::Elapsed),

    /// Any other driver or connection failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
