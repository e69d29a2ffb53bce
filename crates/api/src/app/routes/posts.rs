//! Post, comment, like and moderation endpoints.
//!
//! Listing and viewing are anonymous by design. Every write authenticates
//! first, then applies its gates in the fixed order: active → role/self.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use forum_auth::{Role, require_active, require_not_self, require_role};
use forum_core::PostId;

use crate::app::{dto, errors, services::AppServices};
use crate::guard;

fn parse_post_id(raw: &str) -> Result<PostId, axum::response::Response> {
    raw.parse::<PostId>().map_err(errors::domain_error_to_response)
}

/// GET /posts - list posts with comments and like counts (anonymous).
pub async fn list_posts(
    Extension(services): Extension<Arc<AppServices>>,
    Query(page): Query<dto::PageQuery>,
) -> axum::response::Response {
    match services.posts.list_posts(page.skip, page.limit) {
        Ok(posts) => (StatusCode::OK, Json(posts)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// GET /posts/:id - fetch a single post (anonymous).
pub async fn get_post(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let post_id = match parse_post_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.posts.get_post(post_id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /posts - create a post (authenticated, active).
pub async fn create_post(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
    Json(body): Json<dto::CreatePostRequest>,
) -> axum::response::Response {
    let principal = match guard::authenticate(&services, &headers) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    if let Err(e) = require_active(&principal) {
        return errors::auth_error_to_response(e);
    }

    match services
        .posts
        .create_post(principal.id, body.title, body.content)
    {
        Ok(post) => (StatusCode::CREATED, Json(post)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /posts/:id/comments - comment on a post (authenticated, active).
pub async fn create_comment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<dto::CreateCommentRequest>,
) -> axum::response::Response {
    let principal = match guard::authenticate(&services, &headers) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    if let Err(e) = require_active(&principal) {
        return errors::auth_error_to_response(e);
    }

    let post_id = match parse_post_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services
        .posts
        .add_comment(post_id, principal.id, body.content)
    {
        Ok(comment) => (StatusCode::CREATED, Json(comment)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /posts/:id/like - like someone else's post (authenticated, active,
/// not the author).
pub async fn like_post(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> axum::response::Response {
    let principal = match guard::authenticate(&services, &headers) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    if let Err(e) = require_active(&principal) {
        return errors::auth_error_to_response(e);
    }

    let post_id = match parse_post_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let view = match services.posts.get_post(post_id) {
        Ok(view) => view,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = require_not_self(&principal, view.post.author_id) {
        return errors::auth_error_to_response(e);
    }

    match services.posts.like(post_id, principal.id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "post liked" })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// POST /posts/:id/moderate - flag a post (authenticated, active, moderator).
pub async fn moderate_post(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(query): Query<dto::ModerateQuery>,
    headers: HeaderMap,
) -> axum::response::Response {
    let principal = match guard::authenticate(&services, &headers) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    if let Err(e) = require_active(&principal) {
        return errors::auth_error_to_response(e);
    }
    if let Err(e) = require_role(&principal, Role::Moderator) {
        return errors::auth_error_to_response(e);
    }

    let post_id = match parse_post_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.posts.set_misleading(post_id, query.is_misleading) {
        Ok(post) => (StatusCode::OK, Json(post)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
