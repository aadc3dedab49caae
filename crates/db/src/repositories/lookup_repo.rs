//! Read-only access to the seeded lookup tables.

use sqlx::PgPool;

use crate::models::lookup::{EquipmentCategory, WorkCenter};

pub struct LookupRepo;

impl LookupRepo {
    pub async fn list_work_centers(pool: &PgPool) -> Result<Vec<WorkCenter>, sqlx::Error> {
        sqlx::query_as::<_, WorkCenter>("SELECT id, name FROM work_centers ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn list_categories(pool: &PgPool) -> Result<Vec<EquipmentCategory>, sqlx::Error> {
        sqlx::query_as::<_, EquipmentCategory>(
            "SELECT id, name FROM equipment_categories ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
