//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the API allows patching, a `Deserialize` update DTO with all
//!   `Option` fields

pub mod audit;
pub mod dashboard;
pub mod equipment;
pub mod lookup;
pub mod request;
pub mod team;
pub mod technician;
pub mod user;
