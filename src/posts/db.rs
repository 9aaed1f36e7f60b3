//! Database operations for posts and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Path of the thumbnail asset, served under `/uploads`
    pub thumbnail: Option<String>,
    /// Id of the owning author
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert a new post owned by `user_id`.
pub async fn create_post(
    pool: &PgPool,
    title: &str,
    content: &str,
    thumbnail: Option<&str>,
    user_id: i64,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, thumbnail, user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, content, thumbnail, user_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(thumbnail)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// All posts, newest first.
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, thumbnail, user_id, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// A single post, or None if absent.
pub async fn get_post_by_id(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, thumbnail, user_id, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update title, content, and (when provided) the thumbnail.
pub async fn update_post(
    pool: &PgPool,
    id: i64,
    title: &str,
    content: &str,
    thumbnail: Option<&str>,
) -> Result<Post, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, content = $2, thumbnail = COALESCE($3, thumbnail), updated_at = now()
        WHERE id = $4
        RETURNING id, title, content, thumbnail, user_id, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(thumbnail)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete a post. Comments go with it (cascade).
pub async fn delete_post(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert a comment by `user_id` on `post_id`.
pub async fn create_comment(
    pool: &PgPool,
    post_id: i64,
    user_id: i64,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, user_id, post_id)
        VALUES ($1, $2, $3)
        RETURNING id, content, user_id, post_id, created_at
        "#,
    )
    .bind(content)
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await
}
