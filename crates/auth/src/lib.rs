//! `forum-auth` — authentication/authorization core (pure boundary).
//!
//! This crate is intentionally decoupled from HTTP and storage. It covers
//! password credential verification, issuance and validation of signed,
//! time-limited bearer tokens, resolution of the acting identity from a
//! token, and role-based access gates.
//!
//! Known limitation: there is no token revocation or rotation mechanism.
//! Expiry is the only lifecycle end for an issued token — a compromised
//! token stays valid until it expires. Adding a revocation list would break
//! the statelessness the rest of the service relies on.

pub mod claims;
pub mod error;
pub mod gate;
pub mod password;
pub mod principal;
pub mod resolve;
pub mod token;

pub use claims::Claims;
pub use error::{AuthError, AuthResult};
pub use gate::{require_active, require_not_self, require_role};
pub use principal::{Principal, Role, UserDirectory, UserRecord};
pub use resolve::IdentityResolver;
pub use token::{TokenCodec, TokenConfig};
