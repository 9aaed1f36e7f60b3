/**
 * Stored Credentials
 *
 * This module defines the stored credential model and its database
 * operations. It is the persistence port the authentication core depends
 * on: find by username, find by username-or-email, insert.
 */

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::auth::Role;

/// A stored credential.
///
/// `password_hash` never leaves the server; responses use
/// [`crate::auth::UserResponse`] instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

fn row_to_user(row: PgRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        role: Role::from_str(row.get::<String, _>("role").as_str()).unwrap_or_default(),
        created_at: row.get("created_at"),
    }
}

/// Insert a new credential and return the stored row.
///
/// Uniqueness of username and email is enforced by the database; callers
/// check for existing rows first to report a conflict instead of a bare
/// constraint violation.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
    role: Role,
) -> Result<User, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO users (username, email, password_hash, role)
        VALUES ($1, $2, $3, $4)
        RETURNING id, username, email, password_hash, role, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(role.as_str())
    .fetch_one(pool)
    .await?;

    Ok(row_to_user(row))
}

/// Find a credential by username (case-sensitive exact match).
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, username, email, password_hash, role, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(row_to_user))
}

/// Find a credential matching either the username or the email.
///
/// Used by registration to report conflicts before inserting.
pub async fn get_user_by_username_or_email(
    pool: &PgPool,
    username: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, username, email, password_hash, role, created_at
        FROM users
        WHERE username = $1 OR email = $2
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(row_to_user))
}

/// Find a credential by id.
pub async fn get_user_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, username, email, password_hash, role, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(row_to_user))
}
