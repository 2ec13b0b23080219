//! # User roles and the permission predicate
//!
//! TimeWise knows exactly three roles. They are ordered by precedence, highest
//! first: [`Role::Admin`], [`Role::Manager`], [`Role::Supervisor`]. The derived
//! `Ord` follows that list, so `Role::Admin < Role::Supervisor` reads as
//! "admin comes before supervisor".
//!
//! On the wire a role is its upper-case name (`"ADMIN"`, `"MANAGER"`,
//! `"SUPERVISOR"`).
//!
//! [`has_role`] is the only access check the client performs. A missing role is
//! an ordinary input and yields `false`, as does an empty allowed set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A TimeWise user role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Supervisor,
}

impl Role {
    /// Every role, in precedence order.
    pub const PRECEDENCE: [Role; 3] = [Role::Admin, Role::Manager, Role::Supervisor];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Supervisor => "SUPERVISOR",
        }
    }

    /// Human-readable label for badges and menus.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Supervisor => "Supervisor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::PRECEDENCE
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Whether `role` is present and one of `allowed`.
pub fn has_role(role: Option<Role>, allowed: &[Role]) -> bool {
    match role {
        Some(role) => allowed.contains(&role),
        None => false,
    }
}
