//! Dashboard statistics handler.

use axum::extract::State;
use axum::Json;
use upkeep_db::models::dashboard::DashboardStats;
use upkeep_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::handlers::visibility_scope;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /stats
///
/// Role-scoped dashboard figures, computed over exactly the row set the
/// caller can list.
pub async fn get_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let scope = visibility_scope(&state, &user).await?;
    let stats = StatsRepo::fetch(&state.pool, &scope).await?;
    Ok(Json(DataResponse { data: stats }))
}
