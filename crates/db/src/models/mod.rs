//! Database row structs and input DTOs.

pub mod movie;
