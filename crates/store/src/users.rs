//! User account storage.

use std::collections::HashMap;
use std::sync::RwLock;

use forum_auth::{Role, UserDirectory, UserRecord};
use forum_core::{DomainError, DomainResult, UserId};

/// A registration write: the credential digest is produced by the caller
/// (via `forum_auth::password::hash`) before it reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// In-memory user store, keyed by username (unique, case-sensitive).
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a user account. Fails with `Conflict` if the username is
    /// already registered.
    pub fn create(&self, new_user: NewUser) -> DomainResult<UserRecord> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::store("user store lock poisoned"))?;

        if users.contains_key(&new_user.username) {
            return Err(DomainError::conflict("username already registered"));
        }

        let record = UserRecord {
            id: UserId::new(),
            username: new_user.username.clone(),
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: true,
        };

        users.insert(new_user.username, record.clone());
        tracing::info!(user_id = %record.id, username = %record.username, "user registered");

        Ok(record)
    }

    /// Deactivate an account. Used by tests and operational tooling; there
    /// is no HTTP surface for it.
    pub fn deactivate(&self, username: &str) -> DomainResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| DomainError::store("user store lock poisoned"))?;

        let user = users.get_mut(username).ok_or(DomainError::NotFound)?;
        user.is_active = false;
        Ok(())
    }
}

impl UserDirectory for UserStore {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::store("user store lock poisoned"))?;
        Ok(users.get(username).cloned())
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, DomainError> {
        let users = self
            .users
            .read()
            .map_err(|_| DomainError::store("user store lock poisoned"))?;
        Ok(users.values().find(|u| u.id == id).cloned())
    }
}
