//! Role-scoped dashboard aggregates.

use sqlx::PgPool;
use upkeep_core::visibility::VisibilityScope;

use crate::models::dashboard::{DashboardStats, StatsRow};
use crate::repositories::scope_predicate;

pub struct StatsRepo;

impl StatsRepo {
    /// Compute all dashboard figures over the scoped row set.
    ///
    /// One statement, one snapshot: the four figures can never disagree
    /// about which rows they were computed over.
    pub async fn fetch(
        pool: &PgPool,
        scope: &VisibilityScope,
    ) -> Result<DashboardStats, sqlx::Error> {
        let mut idx = 1u32;
        let (scope_clause, scope_bind) = scope_predicate(scope, "", &mut idx);

        let query = format!(
            "SELECT \
                COUNT(DISTINCT equipment_id) FILTER \
                    (WHERE request_type = 'Corrective' \
                       AND stage IN ('New', 'In Progress')) AS critical_equipment, \
                COUNT(*) FILTER \
                    (WHERE stage = 'In Progress' \
                       AND technician_id IS NOT NULL) AS technician_load, \
                COUNT(*) FILTER (WHERE stage IN ('New', 'In Progress')) AS active_requests, \
                COUNT(*) FILTER (WHERE stage = 'New') AS stage_new, \
                COUNT(*) FILTER (WHERE stage = 'In Progress') AS stage_in_progress, \
                COUNT(*) FILTER (WHERE stage = 'Repaired') AS stage_repaired, \
                COUNT(*) FILTER (WHERE stage = 'Scrap') AS stage_scrap \
             FROM maintenance_requests \
             WHERE {scope_clause}"
        );

        let mut q = sqlx::query_as::<_, StatsRow>(&query);
        if let Some(bind) = scope_bind {
            q = q.bind(bind);
        }
        let row = q.fetch_one(pool).await?;
        Ok(row.into())
    }
}
