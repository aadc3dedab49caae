//! In-process audit event bus backed by a `tokio::sync::broadcast` channel.
//!
//! Publish order is delivery order: broadcast preserves ordering per
//! receiver, and the recorder is a single consumer, so audit entries from
//! one triggering operation are never reordered relative to each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use upkeep_core::types::DbId;

// ---------------------------------------------------------------------------
// AuditEvent
// ---------------------------------------------------------------------------

/// One audit trail entry, emitted after a successful mutation.
///
/// Constructed via [`AuditEvent::new`] and enriched with the builder
/// methods [`by`](AuditEvent::by), [`on`](AuditEvent::on), and
/// [`with_details`](AuditEvent::with_details).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Action name, e.g. `"CREATE_REQUEST"`.
    pub action: String,

    /// Id of the acting user, when known.
    pub user_id: Option<DbId>,

    /// Kind of the affected entity (e.g. `"MaintenanceRequest"`).
    pub target_type: Option<String>,

    /// Database id of the affected entity.
    pub target_id: Option<DbId>,

    /// Free-form human-readable details.
    pub details: Option<String>,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl AuditEvent {
    /// Create a new event with only the required action name.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            user_id: None,
            target_type: None,
            target_id: None,
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the acting user.
    pub fn by(mut self, user_id: DbId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attach the affected entity.
    pub fn on(mut self, target_type: impl Into<String>, target_id: DbId) -> Self {
        self.target_type = Some(target_type.into());
        self.target_id = Some(target_id);
        self
    }

    /// Attach free-form details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

// ---------------------------------------------------------------------------
// AuditBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for audit events.
///
/// Shared via `Arc<AuditBus>` across the application. Publishing is
/// fire-and-forget: it cannot fail from the caller's point of view.
pub struct AuditBus {
    sender: broadcast::Sender<AuditEvent>,
}

impl AuditBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full the oldest un-consumed events are dropped
    /// and a slow receiver observes `RecvError::Lagged` — acceptable under
    /// the audit trail's best-effort guarantee.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the recorder (when subscribed) ensures database capture.
    pub fn publish(&self, event: AuditEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<AuditEvent> {
        self.sender.subscribe()
    }
}

impl Default for AuditBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
