// src/db/mod.rs

//! Repository functions. All SQL lives here; handlers stay thin.

pub mod carts;
pub mod catalog;
pub mod orders;
pub mod users;

use crate::errors::Result;
use sqlx::PgPool;

/// Applies `schema.sql`. Every statement is idempotent, so this is safe to
/// run on each startup.
pub async fn apply_schema(pool: &PgPool) -> Result<()> {
  sqlx::raw_sql(include_str!("../../schema.sql")).execute(pool).await?;
  tracing::info!("Database schema applied.");
  Ok(())
}

/// Inserts the sample catalog from `seed.sql` (development convenience,
/// gated by the SEED_DB config flag).
pub async fn seed(pool: &PgPool) -> Result<()> {
  sqlx::raw_sql(include_str!("../../seed.sql")).execute(pool).await?;
  tracing::info!("Database seeded with sample catalog data.");
  Ok(())
}
