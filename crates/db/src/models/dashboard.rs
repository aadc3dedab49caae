//! Dashboard statistics types.

use serde::Serialize;
use sqlx::FromRow;

/// Per-stage request counts.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageCounts {
    pub new: i64,
    pub in_progress: i64,
    pub repaired: i64,
    pub scrap: i64,
}

impl StageCounts {
    pub fn total(&self) -> i64 {
        self.new + self.in_progress + self.repaired + self.scrap
    }
}

/// Role-scoped dashboard figures.
///
/// All four figures are computed over the same scoped row set in a single
/// statement, so they are mutually consistent for a given principal at a
/// given instant.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Distinct equipment with an open (`New`/`In Progress`) Corrective request.
    pub critical_equipment: i64,
    /// `In Progress` requests with a technician assigned.
    pub technician_load: i64,
    /// Requests in `New` or `In Progress`.
    pub active_requests: i64,
    pub by_stage: StageCounts,
}

/// Flat row shape returned by the single aggregate query.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct StatsRow {
    pub critical_equipment: i64,
    pub technician_load: i64,
    pub active_requests: i64,
    pub stage_new: i64,
    pub stage_in_progress: i64,
    pub stage_repaired: i64,
    pub stage_scrap: i64,
}

impl From<StatsRow> for DashboardStats {
    fn from(row: StatsRow) -> Self {
        DashboardStats {
            critical_equipment: row.critical_equipment,
            technician_load: row.technician_load,
            active_requests: row.active_requests,
            by_stage: StageCounts {
                new: row.stage_new,
                in_progress: row.stage_in_progress,
                repaired: row.stage_repaired,
                scrap: row.stage_scrap,
            },
        }
    }
}
