//! Password hashing with Argon2id.
//!
//! Digests are PHC strings carrying the algorithm, parameters and a
//! per-call random salt, so two hashes of the same password differ while
//! both verify. Parameters follow the OWASP recommendation.

use argon2::{
    Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{AuthError, AuthResult};

/// Argon2id instance: 64 MiB memory, 3 iterations, 1 lane.
fn argon2_instance() -> Argon2<'static> {
    let params = Params::new(64 * 1024, 3, 1, None).expect("static argon2 params are valid");
    Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params)
}

/// Hash a password with a fresh random salt, returning the PHC string.
pub fn hash(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    argon2_instance()
        .hash_password(password.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|e| AuthError::internal(anyhow::anyhow!("password hashing failed: {e}")))
}

/// Verify a password against a stored PHC digest.
///
/// The underlying comparison is constant-time. A malformed digest (data
/// corruption) verifies as `false`: at this layer a corrupt credential is
/// indistinguishable from a wrong password, and the unknown-user case is
/// merged one layer up.
pub fn verify(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };

    argon2_instance()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
