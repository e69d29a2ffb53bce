//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: configuration surface and shared service wiring
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: services::ApiConfig) -> Router {
    let services = Arc::new(services::AppServices::new(&config));

    // Read-only post routes are anonymous by design; everything that writes
    // authenticates inside the handler via the guard.
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/register", post(routes::auth::register))
        .route("/token", post(routes::auth::login))
        .route(
            "/posts",
            get(routes::posts::list_posts).post(routes::posts::create_post),
        )
        .route("/posts/:id", get(routes::posts::get_post))
        .route("/posts/:id/comments", post(routes::posts::create_comment))
        .route("/posts/:id/like", post(routes::posts::like_post))
        .route("/posts/:id/moderate", post(routes::posts::moderate_post))
        .layer(Extension(services))
}
