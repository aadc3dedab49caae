//! Route definitions for the audit trail.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Audit routes mounted at `/admin/audit-logs`. Admin only (enforced by the
/// handler extractor).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(audit::list_audit_logs))
}
