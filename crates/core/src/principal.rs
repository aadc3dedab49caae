//! Roles and the authenticated principal.
//!
//! `Role` is a closed sum type: every dispatch on it is an exhaustive
//! `match`, so adding a role forces every call site to be revisited. The
//! principal is threaded explicitly into every core operation — there is no
//! ambient "current user" anywhere in the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// The three actor roles of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Full access; the only role that may scrap equipment or delete requests.
    Admin,
    /// A requester: creates equipment and maintenance requests, sees only
    /// requests they authored.
    CompanyUser,
    /// A field worker: sees requests routed to their team.
    Technician,
}

impl Role {
    /// Canonical storage form, matching the `users.role` CHECK constraint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::CompanyUser => "Company User",
            Role::Technician => "Technician",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Company User" => Ok(Role::CompanyUser),
            "Technician" => Ok(Role::Technician),
            other => Err(CoreError::Validation(format!("Unknown role: {other}"))),
        }
    }
}

/// An authenticated actor: identity plus role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: DbId,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: DbId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
