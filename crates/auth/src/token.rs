//! Signed bearer-token codec (issue/decode).
//!
//! The token string is the only wire artifact this subsystem owns: a
//! self-contained, stateless bearer credential with no server-side session
//! table behind it. There is no revocation — expiry is the only lifecycle
//! end.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Claims;
use crate::error::{AuthError, AuthResult};

/// Immutable signing configuration.
///
/// Built once at process start from the external configuration surface and
/// injected into the codec; never a module-level global, so tests can run
/// with distinct secrets side by side.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub algorithm: Algorithm,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, algorithm: Algorithm) -> Self {
        Self {
            secret: secret.into(),
            algorithm,
        }
    }
}

// The signing secret must never end up in logs.
impl core::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Encodes and decodes signed claims payloads.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    header: Header,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(config: &TokenConfig) -> Self {
        // Pin the algorithm: a token declaring any other algorithm is
        // rejected outright (closes algorithm-confusion attacks).
        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            header: Header::new(config.algorithm),
            validation,
        }
    }

    /// Issue a signed token for `subject`, valid for `ttl` from now.
    ///
    /// `ttl` is caller-supplied and must be strictly positive.
    pub fn issue(&self, subject: &str, ttl: Duration) -> AuthResult<String> {
        if ttl <= Duration::zero() {
            return Err(AuthError::internal(anyhow::anyhow!(
                "token ttl must be positive"
            )));
        }

        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        jsonwebtoken::encode(&self.header, &claims, &self.encoding)
            .map_err(|e| AuthError::internal(anyhow::anyhow!("token signing failed: {e}")))
    }

    /// Decode and validate a token string.
    ///
    /// Malformed structure, signature mismatch, a declared algorithm other
    /// than the configured one, and expiry all collapse into the same
    /// `Unauthenticated` outcome — callers cannot tell which check failed,
    /// so a tampered token is indistinguishable from an expired one.
    pub fn decode(&self, token: &str) -> AuthResult<Claims> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| AuthError::Unauthenticated)?;

        // Expiry is exclusive (`now >= exp` means expired); the library
        // check alone would still accept a token at exactly its exp second.
        if Utc::now().timestamp() >= data.claims.exp {
            return Err(AuthError::Unauthenticated);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(&TokenConfig::new("test-secret", Algorithm::HS256))
    }

    #[test]
    fn issue_then_decode_preserves_subject() {
        let codec = codec();
        let token = codec.issue("alice", Duration::minutes(30)).unwrap();

        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn non_positive_ttl_is_refused() {
        let codec = codec();
        assert!(codec.issue("alice", Duration::zero()).is_err());
        assert!(codec.issue("alice", Duration::seconds(-5)).is_err());
    }

    #[test]
    fn tampered_token_is_rejected_like_any_other_invalid_token() {
        let codec = codec();
        let token = codec.issue("alice", Duration::minutes(30)).unwrap();

        // Flip one character in the payload segment.
        let mut bytes = token.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        let result = codec.decode(&tampered);
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenCodec::new(&TokenConfig::new("other-secret", Algorithm::HS256));
        let token = other.issue("alice", Duration::minutes(30)).unwrap();

        assert!(matches!(
            codec().decode(&token),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn algorithm_confusion_is_rejected() {
        // Same secret, but the token declares HS512 while the server pins HS256.
        let hs512 = TokenCodec::new(&TokenConfig::new("test-secret", Algorithm::HS512));
        let token = hs512.issue("alice", Duration::minutes(30)).unwrap();

        assert!(matches!(
            codec().decode(&token),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn expired_token_is_rejected_with_the_same_kind() {
        let codec = codec();
        let now = Utc::now();
        let claims = Claims {
            sub: "alice".to_string(),
            iat: (now - Duration::minutes(10)).timestamp(),
            exp: (now - Duration::minutes(5)).timestamp(),
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            codec.decode(&token),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let codec = codec();
        let now = Utc::now();

        // Still inside the window: accepted.
        let live = Claims {
            sub: "alice".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(30)).timestamp(),
        };
        // At/after exp: rejected even with zero leeway games.
        let stale = Claims {
            sub: "alice".to_string(),
            iat: (now - Duration::seconds(30)).timestamp(),
            exp: now.timestamp(),
        };

        let encode = |claims: &Claims| {
            jsonwebtoken::encode(
                &Header::new(Algorithm::HS256),
                claims,
                &EncodingKey::from_secret(b"test-secret"),
            )
            .unwrap()
        };

        assert!(codec.decode(&encode(&live)).is_ok());
        assert!(matches!(
            codec.decode(&encode(&stale)),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            codec().decode("not.a.token"),
            Err(AuthError::Unauthenticated)
        ));
    }
}
