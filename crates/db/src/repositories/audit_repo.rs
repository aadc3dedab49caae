//! Repository for the append-only `audit_logs` table.
//!
//! Insert-only plus a bounded admin listing. There are no update or delete
//! methods on purpose.

use sqlx::PgPool;
use upkeep_core::types::DbId;

use crate::models::audit::{AuditLog, AuditLogWithUser};

const COLUMNS: &str = "id, user_id, action, target_type, target_id, details, timestamp";

/// Hard cap on the admin listing page size.
const MAX_LIMIT: i64 = 200;

pub struct AuditLogRepo;

impl AuditLogRepo {
    pub async fn insert(
        pool: &PgPool,
        user_id: Option<DbId>,
        action: &str,
        target_type: Option<&str>,
        target_id: Option<DbId>,
        details: Option<&str>,
    ) -> Result<AuditLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO audit_logs (user_id, action, target_type, target_id, details) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AuditLog>(&query)
            .bind(user_id)
            .bind(action)
            .bind(target_type)
            .bind(target_id)
            .bind(details)
            .fetch_one(pool)
            .await
    }

    /// Most recent entries joined with the acting user, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<AuditLogWithUser>, sqlx::Error> {
        sqlx::query_as::<_, AuditLogWithUser>(
            "SELECT l.id, l.user_id, l.action, l.target_type, l.target_id, l.details, \
                    u.name AS user_name, u.role AS user_role, l.timestamp \
             FROM audit_logs l \
             LEFT JOIN users u ON l.user_id = u.id \
             ORDER BY l.timestamp DESC, l.id DESC \
             LIMIT $1",
        )
        .bind(limit.clamp(1, MAX_LIMIT))
        .fetch_all(pool)
        .await
    }
}
