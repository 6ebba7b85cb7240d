//! Domain types and validation for the movie catalog.
//!
//! No I/O lives here: the crate defines the runtime codec, the accumulating
//! validator, list filters, and the movie submission rules shared by the db
//! and api crates.

pub mod filters;
pub mod movie;
pub mod runtime;
pub mod types;
pub mod validate;
