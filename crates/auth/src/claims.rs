//! Claims model for bearer tokens (transport-agnostic).

use serde::{Deserialize, Serialize};

/// The structured data embedded in a token before signing.
///
/// Single-shot-immutable: claims are constructed at issuance and never
/// mutated; a new token is a new value, not an update. `iat`/`exp` are Unix
/// timestamps in seconds, the representation `jsonwebtoken` validates
/// natively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to.
    pub sub: String,

    /// Issued-at (Unix seconds).
    pub iat: i64,

    /// Expiry (Unix seconds). Exclusive: the token is already invalid at
    /// its `exp` second.
    pub exp: i64,
}
