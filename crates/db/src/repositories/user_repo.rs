//! Repository for the `users` table.

use sqlx::PgPool;
use upkeep_core::principal::Role;
use upkeep_core::types::DbId;

use crate::models::technician::Technician;
use crate::models::user::{CreateUser, User};

/// Column list for `users` SELECT queries.
const COLUMNS: &str = "id, name, email, password_hash, role, created_at";

pub struct UserRepo;

impl UserRepo {
    /// Insert a user account.
    pub async fn insert(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Signup: insert the user account and, for the Technician role, the
    /// linked technician row, in one transaction.
    pub async fn signup(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<(User, Option<Technician>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_user = format!(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&insert_user)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(&mut *tx)
            .await?;

        let technician = if input.role == Role::Technician.as_str() {
            let row = sqlx::query_as::<_, Technician>(
                "INSERT INTO technicians (name, user_id) VALUES ($1, $2) \
                 RETURNING id, name, team_id, user_id, created_at",
            )
            .bind(&input.name)
            .bind(user.id)
            .fetch_one(&mut *tx)
            .await?;
            Some(row)
        } else {
            None
        };

        tx.commit().await?;
        Ok((user, technician))
    }

    /// Find a user by email (login).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
