pub mod audit;
pub mod auth;
pub mod equipment;
pub mod health;
pub mod lookups;
pub mod requests;
pub mod stats;
pub mod teams;
pub mod technicians;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                 signup (public)
/// /auth/login                  login (public)
///
/// /requests                    list, create
/// /requests/{id}               update, delete
/// /stats                       role-scoped dashboard figures
///
/// /equipment                   list, create (company user)
/// /equipment/{id}              get, delete
///
/// /teams                       list; create/delete (admin)
/// /technicians                 list; create/delete (admin)
/// /work-centers                list (lookup)
/// /equipment-categories        list (lookup)
///
/// /admin/audit-logs            audit trail (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(requests::router())
        .merge(stats::router())
        .merge(equipment::router())
        .merge(teams::router())
        .merge(technicians::router())
        .merge(lookups::router())
        .nest("/admin/audit-logs", audit::router())
}
