/**
 * Post and Comment Handlers
 *
 * HTTP handlers for the blog surface:
 *
 * - `GET /api/posts` - list all posts (public)
 * - `GET /api/posts/{id}` - read one post (public)
 * - `POST /api/posts` - create a post (author gate)
 * - `PUT /api/posts/{id}` - update a post (author gate + ownership)
 * - `DELETE /api/posts/{id}` - delete a post (author gate + ownership)
 * - `POST /api/posts/{id}/comments` - comment on a post (auth gate)
 *
 * The gates have already verified the token and role by the time these
 * run; handlers read the identity from the request and enforce ownership
 * where the operation mutates an existing post.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::posts::db::{self, Comment, Post};

/// Body for creating or updating a post.
///
/// `thumbnail` is the path of a previously uploaded asset; multipart
/// ingestion is outside this service. On update, an omitted thumbnail
/// keeps the existing one.
#[derive(Deserialize, Debug)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Body for creating a comment.
#[derive(Deserialize, Debug)]
pub struct CommentRequest {
    pub content: String,
}

fn validate_post_body(request: &PostRequest) -> Result<(), ApiError> {
    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return Err(ApiError::validation("title and content are required"));
    }
    Ok(())
}

/// List all posts, newest first. Public.
pub async fn list_posts(State(pool): State<PgPool>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts = db::list_posts(&pool).await?;
    Ok(Json(posts))
}

/// Read a single post. Public.
pub async fn get_post(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, ApiError> {
    let post = db::get_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    Ok(Json(post))
}

/// Create a post owned by the requester. Author gate.
pub async fn create_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<PostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    validate_post_body(&request)?;

    let post = db::create_post(
        &pool,
        &request.title,
        &request.content,
        request.thumbnail.as_deref(),
        user.user_id,
    )
    .await?;

    tracing::info!("post {} created by user {}", post.id, user.user_id);

    Ok((StatusCode::CREATED, Json(post)))
}

/// Update a post. Author gate; the requester must own the post.
pub async fn update_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<PostRequest>,
) -> Result<StatusCode, ApiError> {
    let existing = db::get_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if existing.user_id != user.user_id {
        tracing::warn!(
            "user {} denied update of post {} owned by {}",
            user.user_id,
            id,
            existing.user_id
        );
        return Err(ApiError::Forbidden);
    }

    validate_post_body(&request)?;

    db::update_post(
        &pool,
        id,
        &request.title,
        &request.content,
        request.thumbnail.as_deref(),
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a post. Author gate; the requester must own the post.
pub async fn delete_post(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let existing = db::get_post_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if existing.user_id != user.user_id {
        tracing::warn!(
            "user {} denied delete of post {} owned by {}",
            user.user_id,
            id,
            existing.user_id
        );
        return Err(ApiError::Forbidden);
    }

    db::delete_post(&pool, id).await?;

    tracing::info!("post {} deleted by user {}", id, user.user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Comment on a post. Authentication gate; any role.
pub async fn create_comment(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Path(post_id): Path<i64>,
    Json(request): Json<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("comment content is required"));
    }

    db::get_post_by_id(&pool, post_id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    let comment = db::create_comment(&pool, post_id, user.user_id, &request.content).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
