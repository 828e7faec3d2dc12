// src/models/session.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A bearer-token login session, minted at login time.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Session {
  pub token: Uuid,
  pub user_id: Uuid,
  pub created_at: DateTime<Utc>,
}
