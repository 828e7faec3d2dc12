// src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(name = "handler::make_order", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn make_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  info!("Order creation attempt by user: {}", auth_user.user_id);

  let order = db::orders::place_order(&app_state.db_pool, auth_user.user_id).await?;

  info!(
    "Order {} created for user {}. Total: {}, lines: {}",
    order.order.id,
    auth_user.user_id,
    order.order.total,
    order.items.len()
  );
  Ok(HttpResponse::Created().json(json!({
      "message": "Order created successfully.",
      "order": order
  })))
}

#[instrument(name = "handler::order_history", skip(app_state, auth_user), fields(user_id = %auth_user.user_id))]
pub async fn order_history_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let orders = db::orders::list_orders(&app_state.db_pool, auth_user.user_id).await?;
  info!("Fetched {} order(s) for user {}.", orders.len(), auth_user.user_id);

  Ok(HttpResponse::Ok().json(json!({
      "message": "Orders fetched successfully.",
      "orders": orders
  })))
}

#[instrument(
    name = "handler::get_order",
    skip(app_state, path, auth_user),
    fields(user_id = %auth_user.user_id, order_id = %path.as_ref())
)]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let order = db::orders::find_order(&app_state.db_pool, auth_user.user_id, order_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Order fetched successfully.",
      "order": order
  })))
}

#[instrument(
    name = "handler::list_order_items",
    skip(app_state, path, auth_user),
    fields(user_id = %auth_user.user_id, order_id = %path.as_ref())
)]
pub async fn list_order_items_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();
  let items = db::orders::list_order_items(&app_state.db_pool, auth_user.user_id, order_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": "Order items fetched successfully.",
      "orderItems": items
  })))
}
