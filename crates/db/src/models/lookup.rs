//! Seeded lookup tables: work centers and equipment categories.

use serde::Serialize;
use sqlx::FromRow;
use upkeep_core::types::DbId;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkCenter {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EquipmentCategory {
    pub id: DbId,
    pub name: String,
}
