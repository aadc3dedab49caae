//! Technician handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use upkeep_core::error::CoreError;
use upkeep_core::types::DbId;
use upkeep_db::models::technician::{CreateTechnician, Technician, TechnicianWithTeam};
use upkeep_db::repositories::TechnicianRepo;
use upkeep_events::AuditEvent;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /technicians
pub async fn list_technicians(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<TechnicianWithTeam>>>> {
    let technicians = TechnicianRepo::list_with_team(&state.pool).await?;
    Ok(Json(DataResponse { data: technicians }))
}

/// POST /technicians (admin only)
///
/// Provisions a login account with the Technician role and the linked
/// technician row in one transaction.
pub async fn create_technician(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateTechnician>,
) -> AppResult<(StatusCode, Json<DataResponse<Technician>>)> {
    if input.name.trim().is_empty() || input.email.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name and email are required".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let technician = TechnicianRepo::create_with_account(
        &state.pool,
        &input.name,
        &input.email,
        &password_hash,
        input.team_id,
    )
    .await?;

    state.audit.publish(
        AuditEvent::new("CREATE_TECHNICIAN")
            .by(admin.user_id)
            .on("Technician", technician.id)
            .with_details(format!("Created technician {}", technician.name)),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: technician })))
}

/// DELETE /technicians/{id} (admin only)
///
/// Deletes the technician row only; any linked user account stays.
pub async fn delete_technician(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TechnicianRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Technician",
            id,
        }));
    }

    state.audit.publish(
        AuditEvent::new("DELETE_TECHNICIAN")
            .by(admin.user_id)
            .on("Technician", id)
            .with_details("Deleted technician"),
    );

    Ok(StatusCode::NO_CONTENT)
}
