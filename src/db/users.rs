// src/db/users.rs

use crate::errors::Result;
use crate::models::{Session, User};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool> {
  let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
    .bind(email)
    .fetch_one(pool)
    .await?;
  Ok(exists)
}

pub async fn insert_user(pool: &PgPool, email: &str, password_hash: &str) -> Result<User> {
  let user = sqlx::query_as::<_, User>(
    "INSERT INTO users (email, password_hash) VALUES ($1, $2) \
     RETURNING id, email, password_hash, created_at, updated_at",
  )
  .bind(email)
  .bind(password_hash)
  .fetch_one(pool)
  .await?;
  Ok(user)
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
  let user = sqlx::query_as::<_, User>(
    "SELECT id, email, password_hash, created_at, updated_at FROM users WHERE email = $1",
  )
  .bind(email)
  .fetch_optional(pool)
  .await?;
  Ok(user)
}

/// Mints a new login session for the user. The token is the session's
/// database-generated primary key.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<Session> {
  let session = sqlx::query_as::<_, Session>(
    "INSERT INTO sessions (user_id) VALUES ($1) RETURNING token, user_id, created_at",
  )
  .bind(user_id)
  .fetch_one(pool)
  .await?;
  Ok(session)
}

/// Resolves a bearer token to its user, or `None` for unknown tokens.
pub async fn find_session_user(pool: &PgPool, token: Uuid) -> Result<Option<User>> {
  let user = sqlx::query_as::<_, User>(
    "SELECT u.id, u.email, u.password_hash, u.created_at, u.updated_at \
     FROM sessions s JOIN users u ON u.id = s.user_id WHERE s.token = $1",
  )
  .bind(token)
  .fetch_optional(pool)
  .await?;
  Ok(user)
}
