//! Row-level visibility scoping for maintenance requests.
//!
//! A [`VisibilityScope`] is derived once per call from the principal and is
//! the *single* source of truth for what a caller may read: list endpoints
//! and the stats aggregator both render the same scope, so the two can never
//! diverge.

use crate::principal::{Principal, Role};
use crate::types::DbId;

/// Which maintenance-request rows a principal may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityScope {
    /// No restriction (Admin).
    All,
    /// Only rows authored by this user (Company User).
    CreatedBy(DbId),
    /// Only rows routed to this team (Technician with a team).
    Team(DbId),
    /// No rows at all. The fail-closed default for a technician without a
    /// team assignment — deliberately not "see everything".
    Nothing,
}

impl VisibilityScope {
    /// Derive the scope for a principal.
    ///
    /// `technician_team_id` is the result of looking up the technician row
    /// linked to the principal's user id: `None` means no technician row
    /// exists, `Some(None)` means the row exists but has no team. It is only
    /// consulted for the Technician role.
    pub fn for_principal(
        principal: &Principal,
        technician_team_id: Option<Option<DbId>>,
    ) -> VisibilityScope {
        match principal.role {
            Role::Admin => VisibilityScope::All,
            Role::CompanyUser => VisibilityScope::CreatedBy(principal.user_id),
            Role::Technician => match technician_team_id {
                Some(Some(team_id)) => VisibilityScope::Team(team_id),
                Some(None) | None => VisibilityScope::Nothing,
            },
        }
    }

    /// In-memory form of the scope predicate, over the two columns it can
    /// constrain. The SQL rendering in the db crate must agree with this.
    pub fn matches(&self, created_by_user_id: DbId, team_id: Option<DbId>) -> bool {
        match *self {
            VisibilityScope::All => true,
            VisibilityScope::CreatedBy(user_id) => created_by_user_id == user_id,
            VisibilityScope::Team(scope_team) => team_id == Some(scope_team),
            VisibilityScope::Nothing => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(user_id: DbId, role: Role) -> Principal {
        Principal::new(user_id, role)
    }

    #[test]
    fn admin_sees_everything() {
        let scope = VisibilityScope::for_principal(&principal(1, Role::Admin), None);
        assert_eq!(scope, VisibilityScope::All);
        assert!(scope.matches(99, None));
    }

    #[test]
    fn company_user_sees_only_own_requests() {
        let scope = VisibilityScope::for_principal(&principal(7, Role::CompanyUser), None);
        assert_eq!(scope, VisibilityScope::CreatedBy(7));
        assert!(scope.matches(7, Some(3)));
        assert!(!scope.matches(8, Some(3)));
    }

    #[test]
    fn technician_with_team_sees_team_requests() {
        let scope =
            VisibilityScope::for_principal(&principal(4, Role::Technician), Some(Some(12)));
        assert_eq!(scope, VisibilityScope::Team(12));
        assert!(scope.matches(7, Some(12)));
        assert!(!scope.matches(7, Some(13)));
        assert!(!scope.matches(7, None));
    }

    #[test]
    fn technician_without_team_sees_nothing() {
        // Row exists but team_id is null.
        let scope = VisibilityScope::for_principal(&principal(4, Role::Technician), Some(None));
        assert_eq!(scope, VisibilityScope::Nothing);

        // No technician row at all.
        let scope = VisibilityScope::for_principal(&principal(4, Role::Technician), None);
        assert_eq!(scope, VisibilityScope::Nothing);
        assert!(!scope.matches(4, Some(1)));
    }
}
