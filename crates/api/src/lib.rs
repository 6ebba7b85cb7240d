//! Movie catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes) so
//! integration tests and the binary entrypoint can both assemble the same
//! application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod json;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
