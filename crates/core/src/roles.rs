//! Actor roles.
//!
//! Stored as lowercase text in `users.role` and embedded in JWT claims. The
//! names must match the `ck_users_role` check constraint.

use serde::{Deserialize, Serialize};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// The single role an actor holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse a stored role name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            ROLE_USER => Some(Self::User),
            ROLE_ADMIN => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
