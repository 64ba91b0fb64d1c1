//! Audit log model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Stable audit action identifiers.
pub mod actions {
    pub const APPROVE_BOOKING: &str = "approve_booking";
    pub const REJECT_BOOKING: &str = "reject_booking";
}

/// Immutable record of an administrative state change. Entries are only
/// ever appended; the core never updates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    pub id: i64,
    pub actor_id: i64,
    pub action: String,
    pub target: String,
    pub outcome: String,
    pub logged_at: DateTime<Utc>,
}

/// Payload for appending an entry; id and timestamp come from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAuditEntry {
    pub actor_id: i64,
    pub action: String,
    pub target: String,
    pub outcome: String,
}

impl NewAuditEntry {
    pub fn new(
        actor_id: i64,
        action: impl Into<String>,
        target: impl Into<String>,
        outcome: impl Into<String>,
    ) -> Self {
        Self {
            actor_id,
            action: action.into(),
            target: target.into(),
            outcome: outcome.into(),
        }
    }
}
