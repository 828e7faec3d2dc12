// src/db/orders.rs

//! Cart-to-order conversion and order reads.
//!
//! `place_order` is the one genuinely transactional piece of the system:
//! the availability check, the order insert, the inventory decrements and
//! the cart clearing either all commit together or none of them do.

use std::collections::HashMap;

use crate::db::carts;
use crate::errors::{AppError, Result};
use crate::models::{Order, OrderLine, OrderView};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A cart line joined with its meal, as read under lock at the start of
/// order creation.
#[derive(Debug, FromRow)]
struct SourceLine {
  meal_id: Uuid,
  quantity: i32,
  title: String,
  price: Decimal,
  available_inventory: i32,
}

/// Order total over `(price, quantity)` pairs, rounded to 2 decimal places
/// (midpoint-nearest-even, matching the original bookkeeping).
pub fn order_total<I>(lines: I) -> Decimal
where
  I: IntoIterator<Item = (Decimal, i32)>,
{
  lines
    .into_iter()
    .map(|(price, quantity)| price * Decimal::from(quantity))
    .sum::<Decimal>()
    .round_dp(2)
}

/// Converts the user's cart into an order.
///
/// Within a single transaction: loads the cart lines with their meal rows
/// locked (in a stable order, so concurrent orders cannot deadlock),
/// verifies every line fits the available inventory, computes the total,
/// persists the order and its line snapshots, decrements inventory and
/// clears the cart. Any failure rolls the whole thing back.
pub async fn place_order(pool: &PgPool, user_id: Uuid) -> Result<OrderView> {
  let mut tx = pool.begin().await?;
  let cart = carts::fetch_or_create(&mut tx, user_id).await?;

  let lines = sqlx::query_as::<_, SourceLine>(
    "SELECT ci.meal_id, ci.quantity, m.title, m.price, m.available_inventory \
     FROM cart_items ci JOIN meals m ON m.id = ci.meal_id \
     WHERE ci.cart_id = $1 ORDER BY m.id FOR UPDATE OF m",
  )
  .bind(cart.id)
  .fetch_all(&mut *tx)
  .await?;

  if lines.is_empty() {
    return Err(AppError::Validation("Cart is empty.".to_string()));
  }

  for line in &lines {
    if line.available_inventory - line.quantity < 0 {
      tracing::warn!(
        meal_id = %line.meal_id,
        available = line.available_inventory,
        requested = line.quantity,
        "Order rejected: insufficient inventory."
      );
      return Err(AppError::InsufficientInventory(format!(
        "Not enough {} available.",
        line.title
      )));
    }
  }

  let total = order_total(lines.iter().map(|line| (line.price, line.quantity)));

  let order = sqlx::query_as::<_, Order>(
    "INSERT INTO orders (user_id, total) VALUES ($1, $2) RETURNING id, user_id, total, created_at",
  )
  .bind(user_id)
  .bind(total)
  .fetch_one(&mut *tx)
  .await?;

  let mut items = Vec::with_capacity(lines.len());
  for line in &lines {
    let item_id = sqlx::query_scalar::<_, Uuid>(
      "INSERT INTO order_items (order_id, meal_id, quantity, price_at_purchase) \
       VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(order.id)
    .bind(line.meal_id)
    .bind(line.quantity)
    .bind(line.price)
    .fetch_one(&mut *tx)
    .await?;

    // The rows are already locked, but keep the decrement conditional and
    // check it landed: inventory must never go negative.
    let updated = sqlx::query(
      "UPDATE meals SET available_inventory = available_inventory - $1, updated_at = now() \
       WHERE id = $2 AND available_inventory >= $1",
    )
    .bind(line.quantity)
    .bind(line.meal_id)
    .execute(&mut *tx)
    .await?;
    if updated.rows_affected() != 1 {
      return Err(AppError::InsufficientInventory(format!(
        "Not enough {} available.",
        line.title
      )));
    }

    items.push(OrderLine {
      item_id,
      order_id: order.id,
      meal_id: line.meal_id,
      title: line.title.clone(),
      quantity: line.quantity,
      price_at_purchase: line.price,
    });
  }

  sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
    .bind(cart.id)
    .execute(&mut *tx)
    .await?;

  tx.commit().await?;
  tracing::info!(order_id = %order.id, user_id = %user_id, total = %order.total, "Order placed.");
  Ok(OrderView { order, items })
}

const ORDER_LINE_SELECT: &str =
  "SELECT oi.id AS item_id, oi.order_id, oi.meal_id, m.title, oi.quantity, oi.price_at_purchase \
   FROM order_items oi JOIN meals m ON m.id = oi.meal_id";

/// All of the user's orders, most recent first, each with its nested line
/// snapshots.
pub async fn list_orders(pool: &PgPool, user_id: Uuid) -> Result<Vec<OrderView>> {
  let orders = sqlx::query_as::<_, Order>(
    "SELECT id, user_id, total, created_at FROM orders WHERE user_id = $1 \
     ORDER BY created_at DESC, id DESC",
  )
  .bind(user_id)
  .fetch_all(pool)
  .await?;

  let order_ids: Vec<Uuid> = orders.iter().map(|order| order.id).collect();
  let lines = sqlx::query_as::<_, OrderLine>(&format!(
    "{} WHERE oi.order_id = ANY($1) ORDER BY oi.id ASC",
    ORDER_LINE_SELECT
  ))
  .bind(order_ids)
  .fetch_all(pool)
  .await?;

  let mut by_order: HashMap<Uuid, Vec<OrderLine>> = HashMap::new();
  for line in lines {
    by_order.entry(line.order_id).or_default().push(line);
  }

  Ok(
    orders
      .into_iter()
      .map(|order| {
        let items = by_order.remove(&order.id).unwrap_or_default();
        OrderView { order, items }
      })
      .collect(),
  )
}

/// One order, scoped to its owner. Foreign or unknown ids are `NotFound`.
pub async fn find_order(pool: &PgPool, user_id: Uuid, order_id: Uuid) -> Result<OrderView> {
  let order = sqlx::query_as::<_, Order>(
    "SELECT id, user_id, total, created_at FROM orders WHERE id = $1 AND user_id = $2",
  )
  .bind(order_id)
  .bind(user_id)
  .fetch_optional(pool)
  .await?
  .ok_or_else(|| AppError::NotFound(format!("Order with ID {} not found.", order_id)))?;

  let items = sqlx::query_as::<_, OrderLine>(&format!(
    "{} WHERE oi.order_id = $1 ORDER BY oi.id ASC",
    ORDER_LINE_SELECT
  ))
  .bind(order_id)
  .fetch_all(pool)
  .await?;

  Ok(OrderView { order, items })
}

/// The line snapshots of one owned order.
pub async fn list_order_items(pool: &PgPool, user_id: Uuid, order_id: Uuid) -> Result<Vec<OrderLine>> {
  Ok(find_order(pool, user_id, order_id).await?.items)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
  }

  #[test]
  fn total_matches_the_worked_example() {
    // Meal A: 5.00 x 2, Meal B: 3.50 x 1 -> 13.50
    let total = order_total(vec![(dec("5.00"), 2), (dec("3.50"), 1)]);
    assert_eq!(total, dec("13.50"));
  }

  #[test]
  fn total_of_no_lines_is_zero() {
    assert_eq!(order_total(Vec::<(Decimal, i32)>::new()), Decimal::ZERO);
  }

  #[test]
  fn total_is_rounded_to_two_decimal_places() {
    // 3 x 0.335 = 1.005, which rounds to 1.00 under midpoint-nearest-even.
    assert_eq!(order_total(vec![(dec("0.335"), 3)]), dec("1.00"));
    // 0.675 x 1 rounds up to 0.68 (7 is odd).
    assert_eq!(order_total(vec![(dec("0.675"), 1)]), dec("0.68"));
  }

  #[test]
  fn total_scales_with_quantity() {
    assert_eq!(order_total(vec![(dec("12.90"), 15)]), dec("193.50"));
  }
}
