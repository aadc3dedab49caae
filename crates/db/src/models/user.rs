//! User account entity and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use upkeep_core::types::{DbId, Timestamp};

/// A user account. `role` is one of the `users.role` CHECK values; parse it
/// with `upkeep_core::principal::Role` before making authorization decisions.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new user account. The password is hashed by the
/// caller before it gets here.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
