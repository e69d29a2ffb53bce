//! Authentication/authorization error taxonomy.
//!
//! All four rejection kinds are expected, recoverable-by-the-caller
//! outcomes — never process-fatal, never retried internally.

use thiserror::Error;

/// Result type used across the auth boundary.
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth rejection kinds, plus the one non-rejection: `Internal`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username OR wrong password. The two causes are deliberately
    /// merged into one observable outcome so the login surface cannot be
    /// used to enumerate usernames.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, mis-signed or expired token, or a token subject
    /// that no longer resolves to a user. Merged into one outcome for the
    /// same anti-enumeration reason.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Identity is established but the action is disallowed (inactive
    /// account, wrong role, self-reference violation). A specific reason is
    /// safe to carry here: no enumeration risk remains once identity is
    /// known.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Infrastructure fault (e.g. an unreachable user store). Kept distinct
    /// from the rejection kinds: masking an outage as "invalid credentials"
    /// would make outages indistinguishable from attacks in audit logs.
    #[error("internal auth failure")]
    Internal(#[source] anyhow::Error),
}

impl AuthError {
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    pub fn internal(source: impl Into<anyhow::Error>) -> Self {
        Self::Internal(source.into())
    }
}
