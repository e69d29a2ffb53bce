//! Access gates: pure policy checks applied after identity resolution.
//!
//! - No IO
//! - No panics
//! - No business logic beyond the stated rule
//!
//! Composition order everywhere is: resolve (authenticate) →
//! `require_active` → `require_role` / `require_not_self` → proceed.

use forum_core::UserId;

use crate::error::{AuthError, AuthResult};
use crate::principal::{Principal, Role};

/// Reject principals whose account has been deactivated.
pub fn require_active(principal: &Principal) -> AuthResult<()> {
    if principal.is_active {
        Ok(())
    } else {
        Err(AuthError::forbidden("account is inactive"))
    }
}

/// Require an exact role.
///
/// Roles are not hierarchical: a moderator does not implicitly pass a
/// regular-only check, nor the other way around. Each protected operation
/// declares the exact role it accepts.
pub fn require_role(principal: &Principal, role: Role) -> AuthResult<()> {
    if principal.role == role {
        Ok(())
    } else {
        Err(AuthError::forbidden(format!("requires {role} role")))
    }
}

/// Reject an action a principal performs against a resource they own
/// themselves (e.g. liking one's own post).
pub fn require_not_self(principal: &Principal, owner_id: UserId) -> AuthResult<()> {
    if principal.id == owner_id {
        Err(AuthError::forbidden(
            "action not allowed on your own resource",
        ))
    } else {
        Ok(())
    }
}
