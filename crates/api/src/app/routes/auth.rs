//! Registration and login endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
};

use forum_core::DomainError;
use forum_store::NewUser;

use crate::app::{dto, errors, services::AppServices};

/// POST /register - create a user account.
///
/// The one credential write in the system: the store persists the digest
/// produced by the password hasher. The role is fixed here; there is no
/// self-service promotion later.
pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RegisterRequest>,
) -> axum::response::Response {
    if body.username.trim().is_empty() {
        return errors::domain_error_to_response(DomainError::validation(
            "username must not be empty",
        ));
    }
    if body.password.is_empty() {
        return errors::domain_error_to_response(DomainError::validation(
            "password must not be empty",
        ));
    }

    let password_hash = match forum_auth::password::hash(&body.password) {
        Ok(digest) => digest,
        Err(e) => return errors::auth_error_to_response(e),
    };

    let created = services.users.create(NewUser {
        username: body.username,
        password_hash,
        role: body.role,
    });

    match created {
        Ok(user) => (
            StatusCode::CREATED,
            Json(dto::UserResponse::from(&user)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /token - exchange username/password for a bearer token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services.login(&body.username, &body.password) {
        Ok(access_token) => (
            StatusCode::OK,
            Json(dto::TokenResponse {
                access_token,
                token_type: "bearer",
            }),
        )
            .into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}
