//! Route definitions for maintenance teams.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::teams;
use crate::state::AppState;

/// ```text
/// GET    /teams        -> list_teams
/// POST   /teams        -> create_team (admin)
/// DELETE /teams/{id}   -> delete_team (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route("/teams/{id}", delete(teams::delete_team))
}
