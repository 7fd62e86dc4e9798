//! Authorization gate for resource mutations.
//!
//! One predicate, [`can_mutate`], decides whether an actor may change a
//! resource under a given [`Policy`]. It never fails: an anonymous actor is
//! simply denied. Turning a denial into an HTTP response (404 masking or an
//! explicit 403) is the caller's job, guided by [`DenialSurface`].

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::DbId;

/// The acting user of a request, passed explicitly into each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: DbId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: DbId, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A resource that may have an owning user.
///
/// Admin-managed resources (events) may have no owner.
pub trait Owned {
    fn owner_id(&self) -> Option<DbId>;
}

/// Mutation policy applied to a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Only the resource's owner.
    Owner,
    /// Only admins, regardless of ownership.
    Admin,
    /// The owner or any admin.
    OwnerOrAdmin,
}

/// How a denied mutation is reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialSurface {
    /// Report as "not found" so non-owners cannot probe for existence.
    MaskAsNotFound,
    /// Report as an explicit 403 (admin-only surfaces).
    Forbidden,
}

fn owner_allows(actor: &Actor, resource: &impl Owned) -> bool {
    resource.owner_id() == Some(actor.id)
}

fn admin_allows(actor: &Actor) -> bool {
    actor.is_admin()
}

/// Decide whether `actor` may mutate `resource` under `policy`.
pub fn can_mutate(actor: Option<&Actor>, resource: &impl Owned, policy: Policy) -> bool {
    let Some(actor) = actor else {
        return false;
    };
    match policy {
        Policy::Owner => owner_allows(actor, resource),
        Policy::Admin => admin_allows(actor),
        Policy::OwnerOrAdmin => owner_allows(actor, resource) || admin_allows(actor),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing(Option<DbId>);

    impl Owned for Thing {
        fn owner_id(&self) -> Option<DbId> {
            self.0
        }
    }

    const ALL_POLICIES: [Policy; 3] = [Policy::Owner, Policy::Admin, Policy::OwnerOrAdmin];

    #[test]
    fn owner_may_mutate_under_owner_policy_for_any_role() {
        let thing = Thing(Some(7));
        assert!(can_mutate(Some(&Actor::new(7, Role::User)), &thing, Policy::Owner));
        assert!(can_mutate(Some(&Actor::new(7, Role::Admin)), &thing, Policy::Owner));
    }

    #[test]
    fn non_owner_denied_under_owner_policy_even_if_admin() {
        let thing = Thing(Some(7));
        assert!(!can_mutate(Some(&Actor::new(8, Role::User)), &thing, Policy::Owner));
        assert!(!can_mutate(Some(&Actor::new(8, Role::Admin)), &thing, Policy::Owner));
    }

    #[test]
    fn anonymous_denied_under_every_policy() {
        let owned = Thing(Some(1));
        let unowned = Thing(None);
        for policy in ALL_POLICIES {
            assert!(!can_mutate(None, &owned, policy));
            assert!(!can_mutate(None, &unowned, policy));
        }
    }

    #[test]
    fn admin_policy_ignores_ownership() {
        let admin = Actor::new(99, Role::Admin);
        assert!(can_mutate(Some(&admin), &Thing(Some(1)), Policy::Admin));
        assert!(can_mutate(Some(&admin), &Thing(None), Policy::Admin));
    }

    #[test]
    fn admin_policy_denies_owning_user() {
        let owner = Actor::new(1, Role::User);
        assert!(!can_mutate(Some(&owner), &Thing(Some(1)), Policy::Admin));
    }

    #[test]
    fn owner_or_admin_combines_both() {
        let thing = Thing(Some(5));
        assert!(can_mutate(Some(&Actor::new(5, Role::User)), &thing, Policy::OwnerOrAdmin));
        assert!(can_mutate(Some(&Actor::new(6, Role::Admin)), &thing, Policy::OwnerOrAdmin));
        assert!(!can_mutate(Some(&Actor::new(6, Role::User)), &thing, Policy::OwnerOrAdmin));
    }

    #[test]
    fn unowned_resource_only_admin_can_touch() {
        let event = Thing(None);
        let user = Actor::new(1, Role::User);
        assert!(!can_mutate(Some(&user), &event, Policy::Owner));
        assert!(!can_mutate(Some(&user), &event, Policy::OwnerOrAdmin));
    }
}
