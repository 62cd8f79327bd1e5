use clinic_core::{Identity, Role};

use std::collections::BTreeSet;

/// What a route requires of the current identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// Any logged-in identity
    AnyAuthenticated,
    /// Identity role must be one of these
    RoleIn(BTreeSet<Role>),
}

impl Capability {
    pub fn authenticated() -> Self {
        Self::AnyAuthenticated
    }

    pub fn role_in(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::RoleIn(roles.into_iter().collect())
    }

    /// Hospital and platform administrators.
    pub fn admin_only() -> Self {
        Self::role_in([Role::SuperAdmin, Role::HospitalAdmin])
    }

    pub fn doctor_only() -> Self {
        Self::role_in([Role::Doctor])
    }

    pub fn admits(&self, identity: &Identity) -> bool {
        match self {
            Self::AnyAuthenticated => true,
            Self::RoleIn(roles) => roles.contains(&identity.role),
        }
    }
}
