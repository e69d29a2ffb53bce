//! Configuration surface and shared service wiring.

use chrono::Duration;
use jsonwebtoken::Algorithm;

use forum_auth::{
    AuthError, AuthResult, IdentityResolver, TokenCodec, TokenConfig, UserDirectory, password,
};
use forum_store::{PostStore, UserStore};

/// External configuration: signing secret, signing algorithm and token TTL.
/// Supplied at process start and constant for the process lifetime; secret
/// rotation is out of scope by design.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub token: TokenConfig,
    pub token_ttl: Duration,
}

impl ApiConfig {
    pub fn new(secret: impl Into<String>, algorithm: Algorithm, token_ttl: Duration) -> Self {
        Self {
            token: TokenConfig::new(secret, algorithm),
            token_ttl,
        }
    }

    /// Read the configuration from the environment. Dev defaults are
    /// insecure and loudly logged.
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = match std::env::var("FORUM_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("FORUM_SECRET not set; using insecure dev default");
                "dev-secret".to_string()
            }
        };

        let algorithm = match std::env::var("FORUM_TOKEN_ALGORITHM").ok().as_deref() {
            None | Some("HS256") => Algorithm::HS256,
            Some("HS384") => Algorithm::HS384,
            Some("HS512") => Algorithm::HS512,
            Some(other) => anyhow::bail!("unsupported token algorithm: {other}"),
        };

        let ttl_minutes: i64 = match std::env::var("FORUM_TOKEN_TTL_MINUTES") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("FORUM_TOKEN_TTL_MINUTES: {e}"))?,
            Err(_) => 30,
        };
        if ttl_minutes <= 0 {
            anyhow::bail!("FORUM_TOKEN_TTL_MINUTES must be positive");
        }

        Ok(Self::new(secret, algorithm, Duration::minutes(ttl_minutes)))
    }
}

/// Well-formed Argon2id digest (same parameters as `password::hash`) that no
/// password matches. Verified against when the username is unknown, so both
/// rejection causes pay the full hashing cost and stay indistinguishable
/// through response timing as well as through the response body.
const DUMMY_DIGEST: &str = "$argon2id$v=19$m=65536,t=3,p=1$\
    AAAAAAAAAAAAAAAAAAAAAA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Shared application services, injected into handlers as an extension.
pub struct AppServices {
    pub users: UserStore,
    pub posts: PostStore,
    pub codec: TokenCodec,
    pub resolver: IdentityResolver,
    pub token_ttl: Duration,
}

impl AppServices {
    pub fn new(config: &ApiConfig) -> Self {
        let codec = TokenCodec::new(&config.token);

        Self {
            users: UserStore::new(),
            posts: PostStore::new(),
            resolver: IdentityResolver::new(codec.clone()),
            codec,
            token_ttl: config.token_ttl,
        }
    }

    /// Login control flow: verify the password, then issue a bearer token.
    ///
    /// Unknown username and wrong password collapse into the single
    /// `InvalidCredentials` outcome; a store fault stays `Internal` and is
    /// never disguised as a rejection.
    pub fn login(&self, username: &str, password_attempt: &str) -> AuthResult<String> {
        let user = match self
            .users
            .find_by_username(username)
            .map_err(AuthError::internal)?
        {
            Some(user) => user,
            None => {
                let _ = password::verify(password_attempt, DUMMY_DIGEST);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !password::verify(password_attempt, &user.password_hash) {
            tracing::warn!(username, "failed login attempt");
            return Err(AuthError::InvalidCredentials);
        }

        self.codec.issue(&user.username, self.token_ttl)
    }
}
