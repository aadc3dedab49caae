//! Route definitions for the maintenance-request lifecycle.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// ```text
/// GET    /requests        -> list_requests (scoped)
/// POST   /requests        -> create_request (company user)
/// PUT    /requests/{id}   -> update_request
/// DELETE /requests/{id}   -> delete_request (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/requests",
            get(requests::list_requests).post(requests::create_request),
        )
        .route(
            "/requests/{id}",
            put(requests::update_request).delete(requests::delete_request),
        )
}
