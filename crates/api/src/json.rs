//! Strict JSON body extraction.
//!
//! [`StrictJson`] replaces `axum::Json` for write endpoints. It enforces the
//! request-body contract: a single JSON value of at most [`MAX_BODY_BYTES`],
//! with unknown keys rejected, and every decode defect reported as a 400
//! whose message names the defect rather than echoing serde internals.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::AppError;

/// Largest accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// JSON body extractor with strict decode semantics.
///
/// Rejections are [`AppError::BadRequest`] values carrying one of a closed
/// set of messages; see [`decode_message`].
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(buffer_message)
            .map_err(AppError::BadRequest)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::BadRequest("body must not be empty".to_string()));
        }

        let mut de = serde_json::Deserializer::from_slice(&bytes);
        let value = T::deserialize(&mut de)
            .map_err(|err| AppError::BadRequest(decode_message(&err, &bytes)))?;

        // The body must hold exactly one JSON value; trailing content after
        // the first is a defect, not ignorable garbage.
        de.end().map_err(|_| {
            AppError::BadRequest("body must only contain a single JSON value".to_string())
        })?;

        Ok(StrictJson(value))
    }
}

/// Message for a body that could not be buffered at all.
fn buffer_message(rejection: BytesRejection) -> String {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        format!("body must not be larger than {MAX_BODY_BYTES} bytes")
    } else {
        "body could not be read".to_string()
    }
}

/// Translate a serde_json failure into its client-facing message.
///
/// The defect set is closed: badly-formed JSON (with the byte position where
/// one is known), unknown keys, and type mismatches each get a fixed
/// phrasing. Data errors raised by domain codecs (the runtime format, for
/// one) carry their own client-facing text and pass through unchanged.
fn decode_message(err: &serde_json::Error, bytes: &[u8]) -> String {
    match err.classify() {
        Category::Syntax => format!(
            "body contains badly-formed JSON (at character {})",
            byte_offset(bytes, err.line(), err.column())
        ),
        Category::Eof => "body contains badly-formed JSON".to_string(),
        Category::Io => "body could not be read".to_string(),
        Category::Data => data_message(err, bytes),
    }
}

fn data_message(err: &serde_json::Error, bytes: &[u8]) -> String {
    let msg = err.to_string();
    if let Some(name) = unknown_field_name(&msg) {
        return format!("body contains unknown key \"{name}\"");
    }
    if msg.starts_with("invalid type")
        || msg.starts_with("invalid value")
        || msg.starts_with("invalid length")
        || msg.starts_with("missing field")
    {
        return format!(
            "body contains incorrect JSON type (at character {})",
            byte_offset(bytes, err.line(), err.column())
        );
    }

    // serde_json appends its own position to custom codec messages; the
    // codec's text alone is the client-facing part.
    match msg.rfind(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}

/// Pull the offending key out of serde's `unknown field` message.
fn unknown_field_name(msg: &str) -> Option<&str> {
    msg.strip_prefix("unknown field `")?.split('`').next()
}

/// Convert a serde_json line/column position back to a byte offset into the
/// body. Lines and columns are both 1-based; a column of 0 means the
/// position is unknown.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    if line <= 1 {
        return column;
    }
    let mut newlines = 0;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            newlines += 1;
            if newlines == line - 1 {
                return i + 1 + column;
            }
        }
    }
    column
}
