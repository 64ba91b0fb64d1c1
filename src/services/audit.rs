//! Audit trail queries
//!
//! Read-only access to the append-only audit log, plus the system overview
//! counts shown on the admin dashboard. Entries are written by the engines
//! themselves, inside their own transactions.

use crate::config::Settings;
use crate::database::AuditRepository;
use crate::models::audit::AuditLogEntry;
use crate::utils::errors::{EventlyError, Result};

#[derive(Clone)]
pub struct AuditService {
    audit: AuditRepository,
    settings: Settings,
}

impl AuditService {
    pub fn new(audit: AuditRepository, settings: Settings) -> Self {
        Self { audit, settings }
    }

    /// Most recent audit entries first. `limit` defaults to the configured
    /// page size and is capped by the configured maximum.
    pub async fn list_recent(&self, limit: Option<i64>) -> Result<Vec<AuditLogEntry>> {
        let limit = limit.unwrap_or(self.settings.audit.default_list_limit);

        if limit <= 0 {
            return Err(EventlyError::InvalidInput(
                "audit list limit must be greater than 0".to_string(),
            ));
        }
        if limit > self.settings.audit.max_list_limit {
            return Err(EventlyError::InvalidInput(format!(
                "audit list limit cannot exceed {}",
                self.settings.audit.max_list_limit
            )));
        }

        self.audit.list_recent(limit).await
    }

    /// System overview counts for the admin dashboard
    pub async fn system_stats(&self) -> Result<serde_json::Value> {
        self.audit.system_stats().await
    }
}
