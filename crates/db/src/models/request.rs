//! Maintenance request entity and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use upkeep_core::types::{DbId, Timestamp};

/// A maintenance request row as stored.
///
/// `team_id` / `technician_id` are copied from the equipment's routing
/// defaults at creation time, never taken from the client. `subject`,
/// `equipment_id`, and `created_by_user_id` are immutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceRequest {
    pub id: DbId,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: DbId,
    pub team_id: Option<DbId>,
    pub technician_id: Option<DbId>,
    pub created_by_user_id: DbId,
    pub request_type: String,
    pub stage: String,
    pub scheduled_date: NaiveDate,
    pub duration_hours: Option<f64>,
    pub created_at: Timestamp,
}

/// Request joined with display names for list responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceRequestDetail {
    pub id: DbId,
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: DbId,
    pub team_id: Option<DbId>,
    pub technician_id: Option<DbId>,
    pub created_by_user_id: DbId,
    pub request_type: String,
    pub stage: String,
    pub scheduled_date: NaiveDate,
    pub duration_hours: Option<f64>,
    pub equipment_name: String,
    pub category_name: Option<String>,
    pub technician_name: Option<String>,
    pub team_name: Option<String>,
    pub created_by_name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a request.
///
/// Deliberately has no `team_id`/`technician_id` fields: routing is derived
/// from the equipment's defaults and any client-supplied value would be
/// ignored anyway. `scheduled_date` is optional here so the engine can
/// reject its absence with a guidance error instead of a bare 422.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub subject: String,
    pub description: Option<String>,
    pub equipment_id: Option<DbId>,
    pub request_type: String,
    pub stage: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub duration_hours: Option<f64>,
}

/// DTO for updating a request. These four fields are the only mutable ones;
/// everything else is fixed at creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMaintenanceRequest {
    pub stage: Option<String>,
    pub technician_id: Option<DbId>,
    pub duration_hours: Option<f64>,
    pub scheduled_date: Option<NaiveDate>,
}

impl UpdateMaintenanceRequest {
    /// True when no updatable field was supplied.
    pub fn is_empty(&self) -> bool {
        self.stage.is_none()
            && self.technician_id.is_none()
            && self.duration_hours.is_none()
            && self.scheduled_date.is_none()
    }

    /// Names of the fields present, for the audit trail.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.stage.is_some() {
            fields.push("stage");
        }
        if self.technician_id.is_some() {
            fields.push("technician_id");
        }
        if self.duration_hours.is_some() {
            fields.push("duration_hours");
        }
        if self.scheduled_date.is_some() {
            fields.push("scheduled_date");
        }
        fields
    }
}

/// Filters accepted by the request list endpoint, applied on top of the
/// caller's visibility scope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestFilters {
    pub equipment_id: Option<DbId>,
    pub search: Option<String>,
}
