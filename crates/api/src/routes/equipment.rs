//! Route definitions for equipment.

use axum::routing::get;
use axum::Router;

use crate::handlers::equipment;
use crate::state::AppState;

/// ```text
/// GET    /equipment        -> list_equipment (company user)
/// POST   /equipment        -> create_equipment (company user)
/// GET    /equipment/{id}   -> get_equipment (company user)
/// DELETE /equipment/{id}   -> delete_equipment (company user)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equipment/{id}",
            get(equipment::get_equipment).delete(equipment::delete_equipment),
        )
}
