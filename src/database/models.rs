//! Row types for the `codes` table.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored base64 blob, unique per `(owner_id, name)`.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct CodeRecord {
    pub owner_id: String,
    /// Username of the owner at the time of the most recent save; may be stale.
    pub owner_name: String,
    pub name: String,
    pub payload: String,
    /// Set on first insert; overwrites keep the original value.
    pub created_at: DateTime<Utc>,
}

/// The listing projection returned by `CodeStore::list`.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct CodeSummary {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&CodeRecord> for CodeSummary {
    fn from(record: &CodeRecord) -> Self {
        Self {
            name: record.name.clone(),
            created_at: record.created_at,
        }
    }
}
