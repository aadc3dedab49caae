//! Equipment CRUD handlers.
//!
//! All equipment endpoints are Company User only, matching the requester
//! workflow: requesters register assets, admins and technicians work with
//! the requests raised against them.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use upkeep_core::error::CoreError;
use upkeep_core::types::DbId;
use upkeep_db::models::equipment::{CreateEquipment, Equipment, EquipmentSummary};
use upkeep_db::repositories::EquipmentRepo;
use upkeep_events::AuditEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireCompanyUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the equipment list.
#[derive(Debug, Deserialize)]
pub struct EquipmentListParams {
    /// Matches against name and serial number.
    pub search: Option<String>,
}

/// GET /equipment
pub async fn list_equipment(
    State(state): State<AppState>,
    RequireCompanyUser(_user): RequireCompanyUser,
    Query(params): Query<EquipmentListParams>,
) -> AppResult<Json<DataResponse<Vec<EquipmentSummary>>>> {
    let items = EquipmentRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /equipment/{id}
pub async fn get_equipment(
    State(state): State<AppState>,
    RequireCompanyUser(_user): RequireCompanyUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EquipmentSummary>>> {
    let item = EquipmentRepo::find_summary_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /equipment
///
/// The routing defaults (`maintenance_team_id`, `default_technician_id`)
/// set here are what future requests against this asset will be assigned to.
pub async fn create_equipment(
    State(state): State<AppState>,
    RequireCompanyUser(user): RequireCompanyUser,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<DataResponse<Equipment>>)> {
    if input.name.trim().is_empty() || input.equipment_type.as_deref().unwrap_or("").is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Name and type are required".into(),
        )));
    }

    let equipment = EquipmentRepo::insert(&state.pool, &input).await?;

    state.audit.publish(
        AuditEvent::new("CREATE_EQUIPMENT")
            .by(user.user_id)
            .on("Equipment", equipment.id)
            .with_details(format!("Created {}", equipment.name)),
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: equipment })))
}

/// DELETE /equipment/{id}
pub async fn delete_equipment(
    State(state): State<AppState>,
    RequireCompanyUser(user): RequireCompanyUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EquipmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }));
    }

    state.audit.publish(
        AuditEvent::new("DELETE_EQUIPMENT")
            .by(user.user_id)
            .on("Equipment", id)
            .with_details("Deleted equipment"),
    );

    Ok(StatusCode::NO_CONTENT)
}
