// src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::order_item::OrderLine;

/// An order row. `total` is computed at creation time from the cart lines
/// and never recomputed afterwards.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub user_id: Uuid,
  pub total: Decimal,
  pub created_at: DateTime<Utc>,
}

/// An order with its nested line snapshots, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
  #[serde(flatten)]
  pub order: Order,
  pub items: Vec<OrderLine>,
}
