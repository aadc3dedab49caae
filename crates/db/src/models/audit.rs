//! Audit log entity models.
//!
//! Audit logs are append-only: there is no update DTO and no delete path.
//! Writes happen exclusively through the audit persistence task in the
//! events crate; failures there are logged and dropped, never propagated.

use serde::Serialize;
use sqlx::FromRow;
use upkeep_core::types::{DbId, Timestamp};

/// A single audit log entry. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLog {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub action: String,
    pub target_type: Option<String>,
    pub target_id: Option<DbId>,
    pub details: Option<String>,
    pub timestamp: Timestamp,
}

/// Audit entry joined with the acting user's name and role, for the admin
/// listing endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditLogWithUser {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub action: String,
    pub target_type: Option<String>,
    pub target_id: Option<DbId>,
    pub details: Option<String>,
    pub user_name: Option<String>,
    pub user_role: Option<String>,
    pub timestamp: Timestamp,
}
