//! Repository for the `technicians` table.

use sqlx::PgPool;
use upkeep_core::principal::Role;
use upkeep_core::types::DbId;

use crate::models::technician::{Technician, TechnicianWithTeam};

const COLUMNS: &str = "id, name, team_id, user_id, created_at";

pub struct TechnicianRepo;

impl TechnicianRepo {
    /// List all technicians joined with their team name.
    pub async fn list_with_team(pool: &PgPool) -> Result<Vec<TechnicianWithTeam>, sqlx::Error> {
        sqlx::query_as::<_, TechnicianWithTeam>(
            "SELECT t.id, t.name, t.team_id, t.user_id, m.team_name, t.created_at \
             FROM technicians t \
             LEFT JOIN maintenance_teams m ON t.team_id = m.id \
             ORDER BY t.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Find the technician row linked to a user account, if any.
    ///
    /// This drives technician visibility scoping: no row (or a row without a
    /// team) means the principal sees no team-scoped requests.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Technician>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM technicians WHERE user_id = $1");
        sqlx::query_as::<_, Technician>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a bare technician row (no login account).
    pub async fn insert(
        pool: &PgPool,
        name: &str,
        team_id: Option<DbId>,
        user_id: Option<DbId>,
    ) -> Result<Technician, sqlx::Error> {
        let query = format!(
            "INSERT INTO technicians (name, team_id, user_id) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technician>(&query)
            .bind(name)
            .bind(team_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Admin provisioning: create a user account with the Technician role
    /// and the linked technician row in one transaction.
    pub async fn create_with_account(
        pool: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
        team_id: Option<DbId>,
    ) -> Result<Technician, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_id: DbId = sqlx::query_scalar(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(Role::Technician.as_str())
        .fetch_one(&mut *tx)
        .await?;

        let insert_tech = format!(
            "INSERT INTO technicians (name, team_id, user_id) \
             VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        let technician = sqlx::query_as::<_, Technician>(&insert_tech)
            .bind(name)
            .bind(team_id)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(technician)
    }

    /// Delete a technician independently of any linked user account.
    /// Returns `false` when no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM technicians WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
