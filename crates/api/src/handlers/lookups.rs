//! Read-only lookup handlers: work centers and equipment categories.

use axum::extract::State;
use axum::Json;
use upkeep_db::models::lookup::{EquipmentCategory, WorkCenter};
use upkeep_db::repositories::LookupRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /work-centers
pub async fn list_work_centers(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<WorkCenter>>>> {
    let items = LookupRepo::list_work_centers(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /equipment-categories
pub async fn list_categories(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<EquipmentCategory>>>> {
    let items = LookupRepo::list_categories(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}
