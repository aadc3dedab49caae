use std::sync::Arc;

use upkeep_events::AuditBus;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: upkeep_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Audit event bus; handlers publish here after successful mutations.
    pub audit: Arc<AuditBus>,
}
