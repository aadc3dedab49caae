//! Maintenance team handlers.
//!
//! Deletion is unconditional: requests keep their historical `team_id` and
//! technicians are detached, a documented tolerance rather than a cascade.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use upkeep_core::error::CoreError;
use upkeep_core::types::DbId;
use upkeep_db::models::team::{CreateTeam, MaintenanceTeam};
use upkeep_db::repositories::TeamRepo;
use upkeep_events::AuditEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /teams
pub async fn list_teams(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<MaintenanceTeam>>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: teams }))
}

/// POST /teams (admin only)
pub async fn create_team(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<DataResponse<MaintenanceTeam>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Team name is required".into(),
        )));
    }

    let team = TeamRepo::insert(&state.pool, &input.name).await?;

    state.audit.publish(
        AuditEvent::new("CREATE_TEAM")
            .by(admin.user_id)
            .on("MaintenanceTeam", team.id)
            .with_details(format!("Created team {}", team.team_name)),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: team })))
}

/// DELETE /teams/{id} (admin only)
pub async fn delete_team(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceTeam",
            id,
        }));
    }

    state.audit.publish(
        AuditEvent::new("DELETE_TEAM")
            .by(admin.user_id)
            .on("MaintenanceTeam", id)
            .with_details("Deleted team"),
    );

    Ok(StatusCode::NO_CONTENT)
}
