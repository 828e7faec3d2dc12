// src/models/meal.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Meal {
  pub id: Uuid,
  pub category_id: Uuid,
  pub title: String,
  pub slug: String,
  pub description: Option<String>,
  pub price: Decimal,
  pub available_inventory: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
