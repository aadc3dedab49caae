//! Repository for the `maintenance_teams` table.
//!
//! Team deletion is unconditional: requests referencing the team keep their
//! historical `team_id` (no FK), and technicians on the team are detached
//! via `ON DELETE SET NULL`.

use sqlx::PgPool;
use upkeep_core::types::DbId;

use crate::models::team::MaintenanceTeam;

const COLUMNS: &str = "id, team_name, created_at";

pub struct TeamRepo;

impl TeamRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<MaintenanceTeam>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_teams ORDER BY id");
        sqlx::query_as::<_, MaintenanceTeam>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn insert(pool: &PgPool, name: &str) -> Result<MaintenanceTeam, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_teams (team_name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceTeam>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Delete a team. Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
