//! HTTP handlers, one module per resource.

pub mod audit;
pub mod auth;
pub mod equipment;
pub mod lookups;
pub mod requests;
pub mod stats;
pub mod teams;
pub mod technicians;

use upkeep_core::principal::Role;
use upkeep_core::visibility::VisibilityScope;
use upkeep_db::repositories::TechnicianRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Derive the caller's visibility scope.
///
/// Only the Technician role needs a lookup: its scope comes from the
/// technician row linked to the user account. The same scope feeds both the
/// request list and the stats aggregator, so the two can never disagree.
pub(crate) async fn visibility_scope(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<VisibilityScope> {
    let technician_team_id = match user.role {
        Role::Technician => TechnicianRepo::find_by_user_id(&state.pool, user.user_id)
            .await?
            .map(|t| t.team_id),
        Role::Admin | Role::CompanyUser => None,
    };
    Ok(VisibilityScope::for_principal(
        &user.principal(),
        technician_team_id,
    ))
}
