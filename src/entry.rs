//! The Entry record and its request/response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored row, every column included. Returned by the unfiltered listing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Entry {
    pub id: i64,
    pub name: String,
    pub number: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Projection used by the filtered listing: no `id`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EntrySummary {
    pub name: String,
    pub number: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// JSON write body. Both fields required; missing or mistyped fields are
/// rejected at deserialization.
#[derive(Debug, Deserialize)]
pub struct NewEntry {
    pub name: String,
    pub number: i64,
}

/// Form write body. `name` is optional and defaults at the handler.
#[derive(Debug, Deserialize)]
pub struct NewEntryForm {
    pub name: Option<String>,
}
