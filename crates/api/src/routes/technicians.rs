//! Route definitions for technicians.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::technicians;
use crate::state::AppState;

/// ```text
/// GET    /technicians        -> list_technicians
/// POST   /technicians        -> create_technician (admin)
/// DELETE /technicians/{id}   -> delete_technician (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/technicians",
            get(technicians::list_technicians).post(technicians::create_technician),
        )
        .route("/technicians/{id}", delete(technicians::delete_technician))
}
