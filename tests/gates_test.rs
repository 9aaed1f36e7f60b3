//! Gate integration tests
//!
//! These drive a real router through tower's `oneshot` so the full
//! middleware chain runs: header extraction, token verification, the role
//! check, and identity injection into request extensions. No database is
//! involved; the gates never touch storage.

use axum::body::{to_bytes, Body};
use axum::handler::Handler;
use axum::http::{header::AUTHORIZATION, Request, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use jsonwebtoken::{encode, EncodingKey, Header};
use pretty_assertions::assert_eq;
use tower::util::ServiceExt;

use blog_api::auth::sessions::{Claims, TokenCodec};
use blog_api::auth::Role;
use blog_api::middleware::auth::{require_auth, require_author, AuthUser};

const SECRET: &str = "integration-test-secret";

/// Echoes the identity a gate attached to the request.
async fn whoami(AuthUser(user): AuthUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "user_id": user.user_id,
        "role": user.role,
    }))
}

fn app() -> Router {
    let codec = TokenCodec::new(SECRET);

    Router::new()
        .route(
            "/protected",
            get(whoami.layer(from_fn_with_state(codec.clone(), require_auth))),
        )
        .route(
            "/authors-only",
            get(whoami.layer(from_fn_with_state(codec, require_author))),
        )
}

fn request(path: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(value) = auth {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[tokio::test]
async fn missing_header_is_unauthenticated() {
    let response = app().oneshot(request("/protected", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "missing or invalid authentication token");
}

#[tokio::test]
async fn wrong_scheme_is_unauthenticated() {
    let response = app()
        .oneshot(request("/protected", Some("Token abc")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_bearer_token_is_unauthenticated() {
    let response = app()
        .oneshot(request("/protected", Some("Bearer ")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_unauthenticated() {
    let response = app()
        .oneshot(request("/protected", Some("Bearer not.a.token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_unauthenticated() {
    let now = unix_now();
    let claims = Claims {
        sub: 1,
        role: Role::Author,
        exp: now - 7200,
        iat: now - 10_000,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let response = app()
        .oneshot(request("/protected", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_unauthenticated() {
    let token = TokenCodec::new("some-other-secret")
        .issue(1, Role::Author)
        .unwrap();

    let response = app()
        .oneshot(request("/protected", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_token_reaches_handler_with_identity() {
    let token = TokenCodec::new(SECRET).issue(42, Role::User).unwrap();

    let response = app()
        .oneshot(request("/protected", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user_id"], 42);
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn user_role_is_forbidden_on_author_route() {
    let token = TokenCodec::new(SECRET).issue(42, Role::User).unwrap();

    let response = app()
        .oneshot(request("/authors-only", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    // A valid token with the wrong role is 403, not 401.
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], "insufficient permissions");
}

#[tokio::test]
async fn missing_token_on_author_route_is_unauthenticated() {
    let response = app().oneshot(request("/authors-only", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn author_token_passes_author_gate() {
    let token = TokenCodec::new(SECRET).issue(7, Role::Author).unwrap();

    let response = app()
        .oneshot(request("/authors-only", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user_id"], 7);
    assert_eq!(body["role"], "author");
}

#[tokio::test]
async fn author_token_passes_auth_gate() {
    let token = TokenCodec::new(SECRET).issue(7, Role::Author).unwrap();

    let response = app()
        .oneshot(request("/protected", Some(&format!("Bearer {token}"))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
