//! Handlers for the maintenance-request lifecycle: creation, scoped listing,
//! role-gated field updates, and deletion.
//!
//! This is the workflow engine. Routing on creation is equipment-driven
//! (the create DTO carries no team/technician fields, so a client cannot
//! steer work to an arbitrary team), stage transitions go through
//! `upkeep_core::stage::validate_transition`, and moving a request into
//! Scrap raises the equipment's `is_scrapped` flag in the same transaction
//! as the stage write. Every successful mutation publishes an audit event;
//! failed operations publish nothing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use upkeep_core::error::CoreError;
use upkeep_core::principal::Role;
use upkeep_core::stage::{validate_transition, RequestStage, RequestType};
use upkeep_core::types::DbId;
use upkeep_db::models::request::{
    CreateMaintenanceRequest, MaintenanceRequest, MaintenanceRequestDetail, RequestFilters,
    UpdateMaintenanceRequest,
};
use upkeep_db::repositories::request_repo::NewRequest;
use upkeep_db::repositories::{EquipmentRepo, RequestRepo};
use upkeep_events::AuditEvent;

use crate::error::{AppError, AppResult};
use crate::handlers::visibility_scope;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAdmin, RequireCompanyUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /requests
///
/// List requests visible to the caller, newest first. The visibility scope
/// is applied server-side; `equipment_id` and `search` narrow further.
pub async fn list_requests(
    State(state): State<AppState>,
    user: AuthUser,
    Query(filters): Query<RequestFilters>,
) -> AppResult<Json<DataResponse<Vec<MaintenanceRequestDetail>>>> {
    let scope = visibility_scope(&state, &user).await?;
    let requests = RequestRepo::list(&state.pool, &scope, &filters).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// POST /requests
///
/// Create a request. Company User only. Requires `equipment_id` and
/// `scheduled_date`; the team/technician routing is copied from the
/// equipment's configured defaults at this moment (last reader wins if the
/// defaults change concurrently).
pub async fn create_request(
    State(state): State<AppState>,
    RequireCompanyUser(user): RequireCompanyUser,
    Json(input): Json<CreateMaintenanceRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<MaintenanceRequest>>)> {
    let equipment_id = input.equipment_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Equipment is required".into()))
    })?;
    let scheduled_date = input.scheduled_date.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Scheduled date is required. Please create requests via the calendar.".into(),
        ))
    })?;

    let request_type: RequestType = input.request_type.parse().map_err(AppError::Core)?;

    let stage = match &input.stage {
        Some(raw) => raw.parse::<RequestStage>().map_err(AppError::Core)?,
        None => RequestStage::New,
    };
    // Same restriction as the update path. Unreachable in practice: creation
    // is Company-User-only and Scrap needs Admin.
    if stage == RequestStage::Scrap && user.role != Role::Admin {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only admins can scrap equipment".into(),
        )));
    }

    // Assignment resolution: a fresh read of the equipment's defaults.
    let equipment = EquipmentRepo::find_by_id(&state.pool, equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id: equipment_id,
        }))?;

    let request = RequestRepo::insert(
        &state.pool,
        &NewRequest {
            subject: &input.subject,
            description: input.description.as_deref(),
            equipment_id: equipment.id,
            team_id: equipment.maintenance_team_id,
            technician_id: equipment.default_technician_id,
            created_by_user_id: user.user_id,
            request_type: request_type.as_str(),
            stage: stage.as_str(),
            scheduled_date,
            duration_hours: input.duration_hours,
        },
    )
    .await?;

    state.audit.publish(
        AuditEvent::new("CREATE_REQUEST")
            .by(user.user_id)
            .on("MaintenanceRequest", request.id)
            .with_details(format!("Created request: {}", request.subject)),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// PUT /requests/{id}
///
/// Partial update. Only `stage`, `technician_id`, `duration_hours`, and
/// `scheduled_date` are mutable; an empty field set is rejected. Setting
/// `stage` to Scrap is Admin-only and scraps the equipment atomically with
/// the stage write.
pub async fn update_request(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenanceRequest>,
) -> AppResult<Json<DataResponse<MaintenanceRequest>>> {
    if input.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "No updatable fields supplied".into(),
        )));
    }

    let existing = RequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRequest",
            id,
        }))?;

    let mut scrap_equipment_id = None;
    if let Some(raw) = &input.stage {
        let next: RequestStage = raw.parse().map_err(AppError::Core)?;
        let current: RequestStage = existing.stage.parse().map_err(|_| {
            AppError::InternalError(format!("Stored stage '{}' is invalid", existing.stage))
        })?;

        validate_transition(current, next).map_err(AppError::Core)?;

        if next == RequestStage::Scrap {
            if user.role != Role::Admin {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Only admins can scrap equipment".into(),
                )));
            }
            scrap_equipment_id = Some(existing.equipment_id);
        }
    }

    let updated = RequestRepo::update(&state.pool, id, &input, scrap_equipment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRequest",
            id,
        }))?;

    state.audit.publish(
        AuditEvent::new("UPDATE_REQUEST")
            .by(user.user_id)
            .on("MaintenanceRequest", id)
            .with_details(format!(
                "Updated fields: {}",
                input.changed_fields().join(", ")
            )),
    );

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /requests/{id}
///
/// Hard delete, Admin only. No side effects on the equipment.
pub async fn delete_request(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = RequestRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MaintenanceRequest",
            id,
        }));
    }

    state.audit.publish(
        AuditEvent::new("DELETE_REQUEST")
            .by(admin.user_id)
            .on("MaintenanceRequest", id)
            .with_details("Deleted request"),
    );

    Ok(StatusCode::NO_CONTENT)
}
