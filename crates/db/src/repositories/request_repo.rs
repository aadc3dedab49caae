//! Repository for the `maintenance_requests` table.
//!
//! The scrap side effect lives here: when an update moves a request into the
//! Scrap stage, the stage write and the equipment `is_scrapped` flag are
//! applied in a single transaction, so a failure leaves both unset.

use chrono::NaiveDate;
use sqlx::PgPool;
use upkeep_core::types::DbId;
use upkeep_core::visibility::VisibilityScope;

use crate::models::request::{
    MaintenanceRequest, MaintenanceRequestDetail, RequestFilters, UpdateMaintenanceRequest,
};
use crate::repositories::scope_predicate;

/// Column list for `maintenance_requests` SELECT queries.
const COLUMNS: &str = "\
    id, subject, description, equipment_id, team_id, technician_id, \
    created_by_user_id, request_type, stage, scheduled_date, duration_hours, \
    created_at";

/// Fully resolved insert shape: routing and stage have already been decided
/// by the lifecycle engine; nothing here comes straight from the client.
#[derive(Debug)]
pub struct NewRequest<'a> {
    pub subject: &'a str,
    pub description: Option<&'a str>,
    pub equipment_id: DbId,
    pub team_id: Option<DbId>,
    pub technician_id: Option<DbId>,
    pub created_by_user_id: DbId,
    pub request_type: &'a str,
    pub stage: &'a str,
    pub scheduled_date: NaiveDate,
    pub duration_hours: Option<f64>,
}

pub struct RequestRepo;

impl RequestRepo {
    pub async fn insert(
        pool: &PgPool,
        input: &NewRequest<'_>,
    ) -> Result<MaintenanceRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_requests \
                (subject, description, equipment_id, team_id, technician_id, \
                 created_by_user_id, request_type, stage, scheduled_date, duration_hours) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(input.subject)
            .bind(input.description)
            .bind(input.equipment_id)
            .bind(input.team_id)
            .bind(input.technician_id)
            .bind(input.created_by_user_id)
            .bind(input.request_type)
            .bind(input.stage)
            .bind(input.scheduled_date)
            .bind(input.duration_hours)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_requests WHERE id = $1");
        sqlx::query_as::<_, MaintenanceRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests visible under `scope`, with optional filters, joined
    /// with display names. Newest first.
    pub async fn list(
        pool: &PgPool,
        scope: &VisibilityScope,
        filters: &RequestFilters,
    ) -> Result<Vec<MaintenanceRequestDetail>, sqlx::Error> {
        let mut idx = 1u32;
        let (scope_clause, scope_bind) = scope_predicate(scope, "r.", &mut idx);
        let mut conditions = vec![scope_clause];

        if filters.equipment_id.is_some() {
            conditions.push(format!("r.equipment_id = ${idx}"));
            idx += 1;
        }
        if filters.search.is_some() {
            conditions.push(format!("(r.subject ILIKE ${idx} OR e.name ILIKE ${idx})"));
            idx += 1;
        }

        let query = format!(
            "SELECT r.id, r.subject, r.description, r.equipment_id, r.team_id, \
                    r.technician_id, r.created_by_user_id, r.request_type, r.stage, \
                    r.scheduled_date, r.duration_hours, \
                    e.name AS equipment_name, ec.name AS category_name, \
                    t.name AS technician_name, m.team_name, u.name AS created_by_name, \
                    r.created_at \
             FROM maintenance_requests r \
             JOIN equipment e ON r.equipment_id = e.id \
             LEFT JOIN equipment_categories ec ON e.category_id = ec.id \
             LEFT JOIN technicians t ON r.technician_id = t.id \
             LEFT JOIN maintenance_teams m ON r.team_id = m.id \
             LEFT JOIN users u ON r.created_by_user_id = u.id \
             WHERE {} \
             ORDER BY r.created_at DESC, r.id DESC",
            conditions.join(" AND ")
        );

        let mut q = sqlx::query_as::<_, MaintenanceRequestDetail>(&query);
        if let Some(bind) = scope_bind {
            q = q.bind(bind);
        }
        if let Some(equipment_id) = filters.equipment_id {
            q = q.bind(equipment_id);
        }
        if let Some(search) = &filters.search {
            q = q.bind(format!("%{search}%"));
        }
        q.fetch_all(pool).await
    }

    /// Apply a partial update.
    ///
    /// When `scrap_equipment_id` is set, the equipment's `is_scrapped` flag
    /// is raised in the same transaction as the stage write: either both
    /// land or neither does. Returns `None` when the request id is unknown.
    /// An all-`None` input writes nothing and returns the current row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenanceRequest,
        scrap_equipment_id: Option<DbId>,
    ) -> Result<Option<MaintenanceRequest>, sqlx::Error> {
        let mut idx = 2u32; // $1 is the request id
        let mut assignments = Vec::new();
        if input.stage.is_some() {
            assignments.push(format!("stage = ${idx}"));
            idx += 1;
        }
        if input.technician_id.is_some() {
            assignments.push(format!("technician_id = ${idx}"));
            idx += 1;
        }
        if input.duration_hours.is_some() {
            assignments.push(format!("duration_hours = ${idx}"));
            idx += 1;
        }
        if input.scheduled_date.is_some() {
            assignments.push(format!("scheduled_date = ${idx}"));
        }
        // No fields: nothing to write, so no SET clause to build.
        if assignments.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE maintenance_requests SET {} WHERE id = $1 RETURNING {COLUMNS}",
            assignments.join(", ")
        );
        let mut q = sqlx::query_as::<_, MaintenanceRequest>(&query).bind(id);
        if let Some(stage) = &input.stage {
            q = q.bind(stage);
        }
        if let Some(technician_id) = input.technician_id {
            q = q.bind(technician_id);
        }
        if let Some(duration_hours) = input.duration_hours {
            q = q.bind(duration_hours);
        }
        if let Some(scheduled_date) = input.scheduled_date {
            q = q.bind(scheduled_date);
        }
        let updated = q.fetch_optional(&mut *tx).await?;

        if updated.is_some() {
            if let Some(equipment_id) = scrap_equipment_id {
                sqlx::query("UPDATE equipment SET is_scrapped = TRUE WHERE id = $1")
                    .bind(equipment_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Hard delete. No side effects on equipment. Returns `false` when no
    /// row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
