//! Equipment entity and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use upkeep_core::types::{DbId, Timestamp};

/// An equipment row as stored.
///
/// `maintenance_team_id` / `default_technician_id` are the routing defaults:
/// the only source of truth for who services this asset. `is_scrapped` is
/// monotonic false -> true; no un-scrap path exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
    pub serial_number: Option<String>,
    pub equipment_type: Option<String>,
    pub category_id: Option<DbId>,
    pub work_center_id: Option<DbId>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub assigned_employee: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: Option<String>,
    pub description: Option<String>,
    pub maintenance_team_id: Option<DbId>,
    pub default_technician_id: Option<DbId>,
    pub is_scrapped: bool,
    pub created_at: Timestamp,
}

/// Equipment joined with lookup names and its open-request count, for lists
/// and the detail view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EquipmentSummary {
    pub id: DbId,
    pub name: String,
    pub serial_number: Option<String>,
    pub equipment_type: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub maintenance_team_id: Option<DbId>,
    pub default_technician_id: Option<DbId>,
    pub is_scrapped: bool,
    pub category_name: Option<String>,
    pub work_center_name: Option<String>,
    pub team_name: Option<String>,
    pub technician_name: Option<String>,
    pub open_requests: i64,
    pub created_at: Timestamp,
}

/// DTO for creating equipment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipment {
    pub name: String,
    pub equipment_type: Option<String>,
    pub serial_number: Option<String>,
    pub category_id: Option<DbId>,
    pub work_center_id: Option<DbId>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub assigned_employee: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_info: Option<String>,
    pub description: Option<String>,
    pub maintenance_team_id: Option<DbId>,
    pub default_technician_id: Option<DbId>,
}
