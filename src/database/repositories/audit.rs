//! Audit log repository implementation
//!
//! The audit trail is append-only. `append` takes the caller's transaction
//! so a failed audit write rolls the triggering state change back with it.

use sqlx::{PgConnection, PgPool};
use chrono::Utc;
use crate::models::audit::{AuditLogEntry, NewAuditEntry};
use crate::utils::errors::EventlyError;

#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an entry inside the caller's transaction
    pub async fn append(&self, conn: &mut PgConnection, entry: NewAuditEntry) -> Result<AuditLogEntry, EventlyError> {
        let entry = sqlx::query_as::<_, AuditLogEntry>(
            r#"
            INSERT INTO audit_log (actor_id, action, target, outcome, logged_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, actor_id, action, target, outcome, logged_at
            "#
        )
        .bind(entry.actor_id)
        .bind(entry.action)
        .bind(entry.target)
        .bind(entry.outcome)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        Ok(entry)
    }

    /// Most recent entries first
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<AuditLogEntry>, EventlyError> {
        let entries = sqlx::query_as::<_, AuditLogEntry>(
            "SELECT id, actor_id, action, target, outcome, logged_at FROM audit_log ORDER BY logged_at DESC, id DESC LIMIT $1"
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// System overview counts for the admin dashboard
    pub async fn system_stats(&self) -> Result<serde_json::Value, EventlyError> {
        let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        let (clubs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clubs")
            .fetch_one(&self.pool)
            .await?;
        let (venues,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM venues")
            .fetch_one(&self.pool)
            .await?;
        let (events,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;
        let (attendees,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM attendees")
            .fetch_one(&self.pool)
            .await?;
        let (pending,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE status = 'pending'")
                .fetch_one(&self.pool)
                .await?;
        let (approved,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE status = 'approved'")
                .fetch_one(&self.pool)
                .await?;
        let (rejected,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE status = 'rejected'")
                .fetch_one(&self.pool)
                .await?;

        let stats = serde_json::json!({
            "users": users,
            "clubs": clubs,
            "venues": venues,
            "events": events,
            "attendees": attendees,
            "bookings": {
                "pending": pending,
                "approved": approved,
                "rejected": rejected,
            }
        });

        Ok(stats)
    }
}
