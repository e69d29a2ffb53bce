//! Handler-side authentication guard.
//!
//! "Current user" injection is reframed as an explicit two-step composition:
//! resolve the principal from the bearer header, then apply the access gates
//! the route declares. Protected handlers call [`authenticate`] first;
//! anonymous routes (listing/viewing) never touch it.

use axum::http::{HeaderMap, header};
use axum::response::Response;

use forum_auth::{AuthError, Principal};

use crate::app::{errors, services::AppServices};

/// Extract the bearer token and resolve the acting principal.
///
/// A missing or malformed `Authorization` header and a rejected token all
/// produce the same 401 body as a failed login — no oracle for callers.
pub fn authenticate(services: &AppServices, headers: &HeaderMap) -> Result<Principal, Response> {
    let token = extract_bearer(headers)?;

    services
        .resolver
        .resolve(token, &services.users)
        .map_err(errors::auth_error_to_response)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, Response> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(unauthenticated)?;

    let header = header.to_str().map_err(|_| unauthenticated())?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(unauthenticated)?
        .trim();

    if token.is_empty() {
        return Err(unauthenticated());
    }

    Ok(token)
}

fn unauthenticated() -> Response {
    errors::auth_error_to_response(AuthError::Unauthenticated)
}
