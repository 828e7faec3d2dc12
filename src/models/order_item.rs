// src/models/order_item.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Immutable snapshot of a cart line at order-creation time. Later changes
/// to the meal's price or inventory never touch this row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: Uuid,
  pub order_id: Uuid,
  pub meal_id: Uuid,
  pub quantity: i32,
  pub price_at_purchase: Decimal,
}

/// Order line as returned by the API: the snapshot plus the meal's current
/// title for display.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderLine {
  pub item_id: Uuid,
  pub order_id: Uuid,
  pub meal_id: Uuid,
  pub title: String,
  pub quantity: i32,
  pub price_at_purchase: Decimal,
}
