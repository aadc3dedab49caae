//! Route definitions for the seeded lookup tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/work-centers", get(lookups::list_work_centers))
        .route("/equipment-categories", get(lookups::list_categories))
}
