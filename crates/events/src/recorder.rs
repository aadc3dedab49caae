//! Durable audit persistence service.
//!
//! [`AuditRecorder`] subscribes to the [`AuditBus`](crate::bus::AuditBus)
//! broadcast channel and writes every received [`AuditEvent`] to the
//! `audit_logs` table. It runs as a long-lived background task and shuts
//! down when the bus sender is dropped.
//!
//! Persistence failures are logged and discarded — never surfaced to the
//! operation that emitted the event. Best-effort, at-most-once.

use tokio::sync::broadcast;
use upkeep_db::repositories::AuditLogRepo;
use upkeep_db::DbPool;

use crate::bus::AuditEvent;

/// Background service that persists audit events to the database.
pub struct AuditRecorder;

impl AuditRecorder {
    /// Run the persistence loop.
    ///
    /// Subscribes via the provided `receiver` and persists every event it
    /// receives, in order. The loop exits when the channel is closed (the
    /// [`AuditBus`](crate::bus::AuditBus) was dropped).
    pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<AuditEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if let Err(e) = Self::persist(&pool, &event).await {
                        tracing::error!(
                            error = %e,
                            action = %event.action,
                            "Failed to persist audit event"
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Audit recorder lagged, some events were not persisted"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Audit bus closed, recorder shutting down");
                    break;
                }
            }
        }
    }

    /// Write a single event to the `audit_logs` table.
    async fn persist(pool: &DbPool, event: &AuditEvent) -> Result<(), sqlx::Error> {
        AuditLogRepo::insert(
            pool,
            event.user_id,
            &event.action,
            event.target_type.as_deref(),
            event.target_id,
            event.details.as_deref(),
        )
        .await?;
        Ok(())
    }
}
