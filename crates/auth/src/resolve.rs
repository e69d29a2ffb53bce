//! Per-request authentication boundary.

use crate::error::{AuthError, AuthResult};
use crate::principal::{Principal, UserDirectory};
use crate::token::TokenCodec;

/// Resolves the acting identity from an incoming bearer token.
///
/// Every protected operation goes through [`IdentityResolver::resolve`]
/// before any access gate. Operations that allow anonymous access (read-only
/// listing/viewing) skip it entirely.
#[derive(Clone)]
pub struct IdentityResolver {
    codec: TokenCodec,
}

impl IdentityResolver {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Decode and validate `token`, then load the principal via `directory`.
    ///
    /// A token whose subject no longer resolves to a user (deleted or
    /// renamed account) is rejected exactly like a bad token. A directory
    /// failure propagates as `Internal` so an outage is never mistaken for
    /// an attack. No side effects beyond the single lookup.
    pub fn resolve(&self, token: &str, directory: &dyn UserDirectory) -> AuthResult<Principal> {
        let claims = self.codec.decode(token)?;

        let user = directory
            .find_by_username(&claims.sub)
            .map_err(AuthError::internal)?
            .ok_or(AuthError::Unauthenticated)?;

        Ok(Principal::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Duration;
    use jsonwebtoken::Algorithm;

    use forum_core::{DomainError, UserId};

    use super::*;
    use crate::principal::{Role, UserRecord};
    use crate::token::TokenConfig;

    struct FixedDirectory {
        users: HashMap<String, UserRecord>,
    }

    impl FixedDirectory {
        fn with(users: impl IntoIterator<Item = UserRecord>) -> Self {
            Self {
                users: users
                    .into_iter()
                    .map(|u| (u.username.clone(), u))
                    .collect(),
            }
        }
    }

    impl UserDirectory for FixedDirectory {
        fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, DomainError> {
            Ok(self.users.get(username).cloned())
        }

        fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, DomainError> {
            Ok(self.users.values().find(|u| u.id == id).cloned())
        }
    }

    struct BrokenDirectory;

    impl UserDirectory for BrokenDirectory {
        fn find_by_username(&self, _username: &str) -> Result<Option<UserRecord>, DomainError> {
            Err(DomainError::store("directory unreachable"))
        }

        fn find_by_id(&self, _id: UserId) -> Result<Option<UserRecord>, DomainError> {
            Err(DomainError::store("directory unreachable"))
        }
    }

    fn resolver() -> IdentityResolver {
        IdentityResolver::new(TokenCodec::new(&TokenConfig::new(
            "resolve-test-secret",
            Algorithm::HS256,
        )))
    }

    fn alice() -> UserRecord {
        UserRecord {
            id: UserId::new(),
            username: "alice".to_string(),
            password_hash: "digest".to_string(),
            role: Role::Regular,
            is_active: true,
        }
    }

    #[test]
    fn valid_token_resolves_to_a_fresh_principal() {
        let resolver = resolver();
        let alice = alice();
        let directory = FixedDirectory::with([alice.clone()]);

        let codec = TokenCodec::new(&TokenConfig::new("resolve-test-secret", Algorithm::HS256));
        let token = codec.issue("alice", Duration::minutes(5)).unwrap();

        let principal = resolver.resolve(&token, &directory).unwrap();
        assert_eq!(principal.id, alice.id);
        assert_eq!(principal.username, "alice");
        assert_eq!(principal.role, Role::Regular);
        assert!(principal.is_active);
    }

    #[test]
    fn unknown_subject_is_unauthenticated_like_a_bad_token() {
        let resolver = resolver();
        let directory = FixedDirectory::with([]);

        let codec = TokenCodec::new(&TokenConfig::new("resolve-test-secret", Algorithm::HS256));
        let token = codec.issue("ghost", Duration::minutes(5)).unwrap();

        assert!(matches!(
            resolver.resolve(&token, &directory),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn invalid_token_never_reaches_the_directory() {
        // BrokenDirectory would surface Internal if the lookup ran.
        let result = resolver().resolve("garbage", &BrokenDirectory);
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[test]
    fn directory_failure_is_not_masked_as_a_rejection() {
        let resolver = resolver();
        let codec = TokenCodec::new(&TokenConfig::new("resolve-test-secret", Algorithm::HS256));
        let token = codec.issue("alice", Duration::minutes(5)).unwrap();

        assert!(matches!(
            resolver.resolve(&token, &BrokenDirectory),
            Err(AuthError::Internal(_))
        ));
    }
}
