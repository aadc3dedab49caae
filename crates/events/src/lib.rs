//! Audit trail infrastructure.
//!
//! The lifecycle engine never writes audit rows inline. After each
//! successful mutation it publishes an [`AuditEvent`] on the [`AuditBus`];
//! [`AuditRecorder`] is the single background consumer that drains the bus
//! into the `audit_logs` table. This isolates the audit failure domain:
//! a broken audit store can never fail or roll back the mutation that
//! triggered it.

pub mod bus;
pub mod recorder;

pub use bus::{AuditBus, AuditEvent};
pub use recorder::AuditRecorder;
