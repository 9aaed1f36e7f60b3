/**
 * API Route Handlers
 *
 * This module defines the API route table and wires the gates onto the
 * protected methods.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - public
 * - `POST /api/auth/login` - public
 * - `GET /api/auth/me` - authentication gate
 *
 * ## Posts
 * - `GET /api/posts` - public
 * - `GET /api/posts/{id}` - public
 * - `POST /api/posts` - author gate
 * - `PUT /api/posts/{id}` - author gate
 * - `DELETE /api/posts/{id}` - author gate
 * - `POST /api/posts/{id}/comments` - authentication gate
 *
 * Gates are attached per handler so that public and protected methods can
 * share a path (e.g. anyone may list posts, only authors may create them).
 */

use axum::handler::Handler;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::sessions::TokenCodec;
use crate::auth::{login, me, register};
use crate::middleware::auth::{require_auth, require_author};
use crate::posts::{create_comment, create_post, delete_post, get_post, list_posts, update_post};
use crate::server::state::AppState;

/// Configure API routes.
pub fn configure_api_routes(router: Router<AppState>, codec: &TokenCodec) -> Router<AppState> {
    let auth_gate = from_fn_with_state(codec.clone(), require_auth);
    let author_gate = from_fn_with_state(codec.clone(), require_author);

    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me.layer(auth_gate.clone())))
        // Anyone can read posts; only authors can write them
        .route(
            "/api/posts",
            get(list_posts).post(create_post.layer(author_gate.clone())),
        )
        .route(
            "/api/posts/{id}",
            get(get_post)
                .put(update_post.layer(author_gate.clone()))
                .delete(delete_post.layer(author_gate)),
        )
        // Any authenticated user can comment
        .route(
            "/api/posts/{id}/comments",
            post(create_comment.layer(auth_gate)),
        )
}
