//! Shared type aliases used across the workspace.

use chrono::{DateTime, Utc};

/// Database primary key type for all entities.
pub type DbId = i64;

/// UTC timestamp as stored in `timestamptz` columns.
pub type Timestamp = DateTime<Utc>;
