//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-statement writes that must
//! be atomic (scrap side effect, technician + account provisioning) open a
//! transaction internally.

pub mod audit_repo;
pub mod equipment_repo;
pub mod lookup_repo;
pub mod request_repo;
pub mod stats_repo;
pub mod team_repo;
pub mod technician_repo;
pub mod user_repo;

pub use audit_repo::AuditLogRepo;
pub use equipment_repo::EquipmentRepo;
pub use lookup_repo::LookupRepo;
pub use request_repo::RequestRepo;
pub use stats_repo::StatsRepo;
pub use team_repo::TeamRepo;
pub use technician_repo::TechnicianRepo;
pub use user_repo::UserRepo;

use upkeep_core::types::DbId;
use upkeep_core::visibility::VisibilityScope;

/// Render a visibility scope as a SQL predicate over `maintenance_requests`.
///
/// `prefix` is the table alias (e.g. `"r."`) or empty. `next_idx` is the
/// next free bind-parameter index and is advanced if the predicate binds a
/// value, which is returned alongside the fragment. Must stay in agreement
/// with `VisibilityScope::matches`.
pub(crate) fn scope_predicate(
    scope: &VisibilityScope,
    prefix: &str,
    next_idx: &mut u32,
) -> (String, Option<DbId>) {
    match *scope {
        VisibilityScope::All => ("TRUE".to_string(), None),
        VisibilityScope::Nothing => ("FALSE".to_string(), None),
        VisibilityScope::CreatedBy(user_id) => {
            let clause = format!("{prefix}created_by_user_id = ${next_idx}");
            *next_idx += 1;
            (clause, Some(user_id))
        }
        VisibilityScope::Team(team_id) => {
            let clause = format!("{prefix}team_id = ${next_idx}");
            *next_idx += 1;
            (clause, Some(team_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_predicate_renders_and_advances_bind_index() {
        let mut idx = 1;
        let (clause, bind) = scope_predicate(&VisibilityScope::All, "r.", &mut idx);
        assert_eq!((clause.as_str(), bind, idx), ("TRUE", None, 1));

        let (clause, bind) = scope_predicate(&VisibilityScope::CreatedBy(7), "r.", &mut idx);
        assert_eq!(
            (clause.as_str(), bind, idx),
            ("r.created_by_user_id = $1", Some(7), 2)
        );

        let (clause, bind) = scope_predicate(&VisibilityScope::Team(3), "", &mut idx);
        assert_eq!((clause.as_str(), bind, idx), ("team_id = $2", Some(3), 3));

        let (clause, bind) = scope_predicate(&VisibilityScope::Nothing, "r.", &mut idx);
        assert_eq!((clause.as_str(), bind, idx), ("FALSE", None, 3));
    }
}
