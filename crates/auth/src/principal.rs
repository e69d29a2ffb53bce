//! The identity model: roles, stored user records, resolved principals.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use forum_core::{DomainError, UserId};

/// Account role used for RBAC.
///
/// A closed two-variant set. Checks are exact-match and non-hierarchical:
/// `Moderator` does not implicitly satisfy a regular-only requirement, nor
/// the other way around. Unknown role strings are rejected at the boundary
/// (deserialization/parse); an open string never reaches the access gates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Regular,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Moderator => "moderator",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Role::Regular),
            "moderator" => Ok(Role::Moderator),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}

/// Stored view of a user account, as the directory returns it.
///
/// The credential part (`username`, `password_hash`) is created at
/// registration and owned by the collaborator store; the role can only be
/// set at creation time within this subsystem's scope.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    /// One-way PHC digest. Never reversible, never logged.
    pub password_hash: String,
    pub role: Role,
    pub is_active: bool,
}

// Manual Debug so the digest can never leak through logging.
impl core::fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .finish()
    }
}

/// The resolved, trusted representation of "who is making this request".
///
/// Derived fresh per request from the directory via a validated token's
/// subject claim; never cached across requests and never persisted by this
/// subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<&UserRecord> for Principal {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            is_active: user.is_active,
        }
    }
}

/// Read-only user lookup capability supplied by the collaborator store.
///
/// The auth core never writes through this trait; registration (the one
/// credential write) happens in the store layer using the hasher's output.
pub trait UserDirectory: Send + Sync {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError>;

    fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, DomainError>;
}
