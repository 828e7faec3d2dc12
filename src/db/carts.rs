// src/db/carts.rs

//! Cart mutation and retrieval. Mutations run in a transaction with the
//! meal row locked, so availability checks cannot race concurrent writers.

use crate::errors::{AppError, Result};
use crate::models::{Cart, CartItem, CartLine, CartView, Meal};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Fetches the user's cart, creating it on first access.
pub async fn fetch_or_create(conn: &mut PgConnection, user_id: Uuid) -> Result<Cart> {
  sqlx::query("INSERT INTO carts (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
    .bind(user_id)
    .execute(&mut *conn)
    .await?;
  let cart = sqlx::query_as::<_, Cart>("SELECT id, user_id, created_at FROM carts WHERE user_id = $1")
    .bind(user_id)
    .fetch_one(&mut *conn)
    .await?;
  Ok(cart)
}

/// Loads the full cart representation: lines with meal detail and computed
/// subtotals, plus the cart total rounded to 2 decimal places.
pub async fn load_view(conn: &mut PgConnection, cart_id: Uuid) -> Result<CartView> {
  let items = sqlx::query_as::<_, CartLine>(
    "SELECT ci.id AS item_id, ci.meal_id, m.title, m.slug, m.price, ci.quantity, \
            (m.price * ci.quantity)::numeric(10,2) AS subtotal \
     FROM cart_items ci JOIN meals m ON m.id = ci.meal_id \
     WHERE ci.cart_id = $1 ORDER BY ci.added_at ASC, ci.id ASC",
  )
  .bind(cart_id)
  .fetch_all(&mut *conn)
  .await?;

  let total = items.iter().map(|line| line.subtotal).sum::<Decimal>().round_dp(2);
  Ok(CartView {
    cart_id,
    items,
    total,
  })
}

pub async fn view(pool: &PgPool, user_id: Uuid) -> Result<CartView> {
  let mut conn = pool.acquire().await?;
  let cart = fetch_or_create(&mut conn, user_id).await?;
  load_view(&mut conn, cart.id).await
}

async fn lock_meal(conn: &mut PgConnection, meal_id: Uuid) -> Result<Option<Meal>> {
  let meal = sqlx::query_as::<_, Meal>(
    "SELECT id, category_id, title, slug, description, price, available_inventory, created_at, updated_at \
     FROM meals WHERE id = $1 FOR UPDATE",
  )
  .bind(meal_id)
  .fetch_optional(&mut *conn)
  .await?;
  Ok(meal)
}

/// Adds `quantity` units of a meal to the user's cart. An existing line for
/// the same meal is incremented instead of duplicated. Fails with
/// `NotFound` for an unknown meal and `InsufficientInventory` when the
/// meal's current inventory cannot cover the requested quantity on top of
/// what the cart already holds.
pub async fn add_to_cart(pool: &PgPool, user_id: Uuid, meal_id: Uuid, quantity: i32) -> Result<CartView> {
  if quantity < 1 {
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }

  let mut tx = pool.begin().await?;
  let cart = fetch_or_create(&mut tx, user_id).await?;

  let meal = lock_meal(&mut tx, meal_id)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Meal with ID {} not found.", meal_id)))?;

  let already_in_cart = sqlx::query_scalar::<_, i32>(
    "SELECT quantity FROM cart_items WHERE cart_id = $1 AND meal_id = $2",
  )
  .bind(cart.id)
  .bind(meal_id)
  .fetch_optional(&mut *tx)
  .await?
  .unwrap_or(0);

  if meal.available_inventory <= 0
    || (meal.available_inventory as i64) < already_in_cart as i64 + quantity as i64
  {
    tracing::warn!(
      meal_id = %meal.id,
      available = meal.available_inventory,
      requested = quantity,
      already_in_cart,
      "Insufficient inventory for cart add."
    );
    return Err(AppError::InsufficientInventory(format!(
      "Not enough {} available.",
      meal.title
    )));
  }

  sqlx::query(
    "INSERT INTO cart_items (cart_id, meal_id, quantity) VALUES ($1, $2, $3) \
     ON CONFLICT (cart_id, meal_id) DO UPDATE \
     SET quantity = cart_items.quantity + EXCLUDED.quantity",
  )
  .bind(cart.id)
  .bind(meal_id)
  .bind(quantity)
  .execute(&mut *tx)
  .await?;

  let cart_view = load_view(&mut tx, cart.id).await?;
  tx.commit().await?;
  Ok(cart_view)
}

/// Removes one unit of the meal from the user's cart: decrements the line,
/// deleting it when the quantity reaches zero. `NotFound` when the cart has
/// no line for the meal.
pub async fn remove_one(pool: &PgPool, user_id: Uuid, meal_id: Uuid) -> Result<CartView> {
  let mut tx = pool.begin().await?;
  let cart = fetch_or_create(&mut tx, user_id).await?;

  let quantity = sqlx::query_scalar::<_, i32>(
    "SELECT quantity FROM cart_items WHERE cart_id = $1 AND meal_id = $2 FOR UPDATE",
  )
  .bind(cart.id)
  .bind(meal_id)
  .fetch_optional(&mut *tx)
  .await?
  .ok_or_else(|| AppError::NotFound(format!("Meal with ID {} is not in the cart.", meal_id)))?;

  if quantity <= 1 {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND meal_id = $2")
      .bind(cart.id)
      .bind(meal_id)
      .execute(&mut *tx)
      .await?;
  } else {
    sqlx::query("UPDATE cart_items SET quantity = quantity - 1 WHERE cart_id = $1 AND meal_id = $2")
      .bind(cart.id)
      .bind(meal_id)
      .execute(&mut *tx)
      .await?;
  }

  let cart_view = load_view(&mut tx, cart.id).await?;
  tx.commit().await?;
  Ok(cart_view)
}

/// Lists the raw cart item rows (resource CRUD surface).
pub async fn list_items(pool: &PgPool, user_id: Uuid) -> Result<Vec<CartItem>> {
  let mut conn = pool.acquire().await?;
  let cart = fetch_or_create(&mut conn, user_id).await?;
  let items = sqlx::query_as::<_, CartItem>(
    "SELECT id, cart_id, meal_id, quantity, added_at FROM cart_items \
     WHERE cart_id = $1 ORDER BY added_at ASC, id ASC",
  )
  .bind(cart.id)
  .fetch_all(&mut *conn)
  .await?;
  Ok(items)
}

/// Sets an owned cart item's quantity outright. A non-positive quantity
/// deletes the line (a stored quantity is always >= 1). The new quantity is
/// still checked against the meal's current inventory.
pub async fn set_item_quantity(pool: &PgPool, user_id: Uuid, item_id: Uuid, quantity: i32) -> Result<CartView> {
  let mut tx = pool.begin().await?;
  let cart = fetch_or_create(&mut tx, user_id).await?;

  let meal_id = sqlx::query_scalar::<_, Uuid>(
    "SELECT meal_id FROM cart_items WHERE id = $1 AND cart_id = $2 FOR UPDATE",
  )
  .bind(item_id)
  .bind(cart.id)
  .fetch_optional(&mut *tx)
  .await?
  .ok_or_else(|| AppError::NotFound(format!("Cart item {} not found.", item_id)))?;

  if quantity < 1 {
    sqlx::query("DELETE FROM cart_items WHERE id = $1")
      .bind(item_id)
      .execute(&mut *tx)
      .await?;
  } else {
    let meal = lock_meal(&mut tx, meal_id)
      .await?
      .ok_or_else(|| AppError::NotFound(format!("Meal with ID {} not found.", meal_id)))?;
    if meal.available_inventory < quantity {
      return Err(AppError::InsufficientInventory(format!(
        "Not enough {} available.",
        meal.title
      )));
    }
    sqlx::query("UPDATE cart_items SET quantity = $1 WHERE id = $2")
      .bind(quantity)
      .bind(item_id)
      .execute(&mut *tx)
      .await?;
  }

  let cart_view = load_view(&mut tx, cart.id).await?;
  tx.commit().await?;
  Ok(cart_view)
}

/// Deletes an owned cart item row entirely, whatever its quantity.
pub async fn delete_item(pool: &PgPool, user_id: Uuid, item_id: Uuid) -> Result<CartView> {
  let mut tx = pool.begin().await?;
  let cart = fetch_or_create(&mut tx, user_id).await?;

  let deleted = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND cart_id = $2")
    .bind(item_id)
    .bind(cart.id)
    .execute(&mut *tx)
    .await?;
  if deleted.rows_affected() == 0 {
    return Err(AppError::NotFound(format!("Cart item {} not found.", item_id)));
  }

  let cart_view = load_view(&mut tx, cart.id).await?;
  tx.commit().await?;
  Ok(cart_view)
}
