// src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::db;
use crate::errors::AppError;
use crate::services::auth_service;
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct RegisterRequestPayload {
  pub email: String,
  pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequestPayload {
  pub email: String,
  pub password: String,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::register",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<RegisterRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Registration attempt for email: {}", req_payload.email);

  // Validate before touching the database.
  if req_payload.email.is_empty() || !req_payload.email.contains('@') {
    warn!("Invalid email format provided for registration.");
    return Err(AppError::Validation("Valid email is required.".to_string()));
  }
  if req_payload.password.len() < 8 {
    warn!("Password too short for registration ({} chars).", req_payload.password.len());
    return Err(AppError::Validation(
      "Password must be at least 8 characters long.".to_string(),
    ));
  }

  if db::users::email_exists(&app_state.db_pool, &req_payload.email).await? {
    warn!("Attempt to register with existing email: {}", req_payload.email);
    return Err(AppError::Validation(
      "An account with this email already exists.".to_string(),
    ));
  }

  let password_hash = auth_service::hash_password(&req_payload.password)?;
  let user = db::users::insert_user(&app_state.db_pool, &req_payload.email, &password_hash).await?;

  info!("User created successfully: ID={}, Email={}", user.id, user.email);
  Ok(HttpResponse::Created().json(json!({
      "message": "User created successfully.",
      "userId": user.id.to_string(),
      "email": user.email,
  })))
}

#[instrument(
    name = "handler::login",
    skip(app_state, req_payload),
    fields(req_email = %req_payload.email)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<LoginRequestPayload>,
) -> Result<HttpResponse, AppError> {
  info!("Login attempt for email: {}", req_payload.email);

  // Deliberately the same message for unknown email and wrong password.
  let invalid_credentials = || AppError::Auth("Invalid email or password.".to_string());

  let user = db::users::find_by_email(&app_state.db_pool, &req_payload.email)
    .await?
    .ok_or_else(invalid_credentials)?;

  if !auth_service::verify_password(&user.password_hash, &req_payload.password)? {
    warn!("Failed login attempt for email: {}", req_payload.email);
    return Err(invalid_credentials());
  }

  let session = db::users::create_session(&app_state.db_pool, user.id).await?;

  info!("Login successful for email: {}. User ID: {}", user.email, user.id);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Login successful.",
      "userId": user.id.to_string(),
      "email": user.email,
      "token": session.token.to_string(),
  })))
}
