// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

// --- Request DTOs ---

/// Body of the add-to-cart request. `id` is accepted as an alias so wire
/// clients can send `{"id": <meal_id>, "quantity": <n>}`.
#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  #[serde(alias = "id")]
  pub meal_id: Uuid,
  pub quantity: i32,
}

#[derive(Deserialize, Debug)]
pub struct RemoveFromCartRequestPayload {
  #[serde(alias = "id")]
  pub meal_id: Uuid,
}

#[derive(Deserialize, Debug)]
pub struct UpdateCartItemPayload {
  pub quantity: i32,
}

// --- Handler Implementations ---

#[instrument(name = "handler::view_cart", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn view_cart_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = db::carts::view(&app_state.db_pool, auth_user.user_id).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart fetched successfully.",
      "cart": cart
  })))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, meal_id = %req_payload.meal_id, quantity = %req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<AddToCartRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  info!(
    "Add to cart attempt by user: {}, meal: {}, quantity: {}",
    auth_user.user_id, req_payload.meal_id, req_payload.quantity
  );

  let cart = db::carts::add_to_cart(
    &app_state.db_pool,
    auth_user.user_id,
    req_payload.meal_id,
    req_payload.quantity,
  )
  .await?;

  info!(
    "Add to cart successful for user: {}. Cart now holds {} line(s).",
    auth_user.user_id,
    cart.items.len()
  );
  Ok(HttpResponse::Ok().json(json!({
      "message": "Item added to cart successfully.",
      "cart": cart
  })))
}

#[instrument(
    name = "handler::remove_from_cart",
    skip(app_state, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, meal_id = %req_payload.meal_id)
)]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RemoveFromCartRequestPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let cart = db::carts::remove_one(&app_state.db_pool, auth_user.user_id, req_payload.meal_id).await?;

  info!(
    "Removed one unit of meal {} from user {}'s cart.",
    req_payload.meal_id, auth_user.user_id
  );
  Ok(HttpResponse::Ok().json(json!({
      "message": "Item removed from cart.",
      "cart": cart
  })))
}

#[instrument(name = "handler::list_cart_items", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn list_cart_items_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let items = db::carts::list_items(&app_state.db_pool, auth_user.user_id).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart items fetched successfully.",
      "cartItems": items
  })))
}

#[instrument(
    name = "handler::update_cart_item",
    skip(app_state, path, req_payload, auth_user),
    fields(user_id = %auth_user.user_id, item_id = %path.as_ref(), quantity = %req_payload.quantity)
)]
pub async fn update_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<UpdateCartItemPayload>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let item_id = path.into_inner();
  let cart = db::carts::set_item_quantity(
    &app_state.db_pool,
    auth_user.user_id,
    item_id,
    req_payload.quantity,
  )
  .await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart item updated.",
      "cart": cart
  })))
}

#[instrument(
    name = "handler::delete_cart_item",
    skip(app_state, path, auth_user),
    fields(user_id = %auth_user.user_id, item_id = %path.as_ref())
)]
pub async fn delete_cart_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let item_id = path.into_inner();
  let cart = db::carts::delete_item(&app_state.db_pool, auth_user.user_id, item_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Cart item deleted.",
      "cart": cart
  })))
}
