use std::collections::BTreeMap;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use reeldex_db::DbError;
use serde_json::json;

/// Message sent whenever an internal failure reaches the client.
pub const INTERNAL_MESSAGE: &str =
    "server encountered a problem and could not process your request";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so every failure leaves the API as a JSON
/// object with a single `message` key. For validation failures the value is
/// the field-to-failure map rather than a string.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The request itself was defective: a malformed id, an undecodable
    /// body, and the like. Carries the client-facing message.
    #[error("{0}")]
    BadRequest(String),

    /// The request decoded cleanly but failed domain validation.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    /// The path exists but does not support the request method.
    #[error("the method {0} not supported for this resource")]
    MethodNotAllowed(Method),

    /// A failure from the database layer.
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, json!("resource not found")),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
            AppError::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, json!(errors)),
            AppError::MethodNotAllowed(_) => {
                (StatusCode::METHOD_NOT_ALLOWED, json!(self.to_string()))
            }

            // Not-found from the repository is indistinguishable to the
            // client from a route-level miss.
            AppError::Db(DbError::RecordNotFound) => {
                (StatusCode::NOT_FOUND, json!("resource not found"))
            }
            AppError::Db(err) => {
                tracing::error!(error = %err, "Request failed on a database error");
                (StatusCode::INTERNAL_SERVER_ERROR, json!(INTERNAL_MESSAGE))
            }
        };

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}
