//! Pure domain logic for the maintenance tracker.
//!
//! No I/O lives here: this crate defines the shared id/timestamp aliases,
//! the error taxonomy, the closed role/stage sum types, the stage-transition
//! rules, and the visibility scope derived from an authenticated principal.
//! The `db` crate renders these decisions into SQL; the `api` crate maps
//! them onto HTTP.

pub mod error;
pub mod principal;
pub mod stage;
pub mod types;
pub mod visibility;
