//! Audit log listing handler. Admin only, read only.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use upkeep_db::models::audit::AuditLogWithUser;
use upkeep_db::repositories::AuditLogRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of entries returned.
const DEFAULT_LIMIT: i64 = 50;

/// Query parameters for the audit listing.
#[derive(Debug, Deserialize)]
pub struct AuditListParams {
    pub limit: Option<i64>,
}

/// GET /admin/audit-logs
pub async fn list_audit_logs(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<AuditListParams>,
) -> AppResult<Json<DataResponse<Vec<AuditLogWithUser>>>> {
    let logs =
        AuditLogRepo::list_recent(&state.pool, params.limit.unwrap_or(DEFAULT_LIMIT)).await?;
    Ok(Json(DataResponse { data: logs }))
}
