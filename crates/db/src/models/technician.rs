//! Technician entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use upkeep_core::types::{DbId, Timestamp};

/// A technician row. Both links are optional: a technician may have no login
/// account (`user_id` null) and no team (`team_id` null — an unassigned
/// technician sees no team-scoped requests).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Technician {
    pub id: DbId,
    pub name: String,
    pub team_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Technician joined with its team name for listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TechnicianWithTeam {
    pub id: DbId,
    pub name: String,
    pub team_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub team_name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for the admin "create technician" operation, which provisions a user
/// account alongside the technician row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTechnician {
    pub name: String,
    pub email: String,
    pub password: String,
    pub team_id: Option<DbId>,
}
