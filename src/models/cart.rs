// src/models/cart.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A user's cart row. One per user, created lazily on first access.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cart {
  pub id: Uuid,
  pub user_id: Uuid,
  pub created_at: DateTime<Utc>,
}

/// One cart line as returned by the API: meal detail, quantity and the
/// computed subtotal (price x quantity).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartLine {
  pub item_id: Uuid,
  pub meal_id: Uuid,
  pub title: String,
  pub slug: String,
  pub price: Decimal,
  pub quantity: i32,
  pub subtotal: Decimal,
}

/// The full cart representation returned by cart endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
  pub cart_id: Uuid,
  pub items: Vec<CartLine>,
  pub total: Decimal,
}
