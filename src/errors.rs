// src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Authentication Failed: {0}")]
  Auth(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Insufficient Inventory: {0}")]
  InsufficientInventory(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in functions that use `?` on anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl AppError {
  /// Stable machine-readable code, so API clients can branch on failure
  /// cause instead of parsing human-oriented messages.
  pub fn code(&self) -> &'static str {
    match self {
      AppError::Validation(_) => "invalid_request",
      AppError::Auth(_) => "unauthenticated",
      AppError::NotFound(_) => "not_found",
      AppError::InsufficientInventory(_) => "insufficient_inventory",
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => "internal_error",
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Auth(_) => StatusCode::UNAUTHORIZED,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::InsufficientInventory(_) => StatusCode::CONFLICT,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let detail = match self {
      // Never leak database or config internals to the client.
      AppError::Sqlx(_) => "Database operation failed".to_string(),
      AppError::Config(_) => "Configuration issue".to_string(),
      other => other.to_string(),
    };
    HttpResponse::build(self.status_code()).json(json!({
      "error": self.code(),
      "detail": detail,
    }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use futures_util::FutureExt;

  fn body_json(resp: HttpResponse) -> serde_json::Value {
    let body = actix_web::body::to_bytes(resp.into_body())
      .now_or_never()
      .unwrap()
      .unwrap();
    serde_json::from_slice(&body).unwrap()
  }

  #[test]
  fn statuses_are_distinct_per_failure_kind() {
    assert_eq!(
      AppError::Validation("bad quantity".into()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(AppError::Auth("no token".into()).status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
      AppError::NotFound("no such meal".into()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      AppError::InsufficientInventory("Shakshuka".into()).status_code(),
      StatusCode::CONFLICT
    );
    assert_eq!(
      AppError::Internal("boom".into()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn database_detail_is_not_leaked() {
    let parsed = body_json(AppError::Sqlx(sqlx::Error::RowNotFound).error_response());
    assert_eq!(parsed["error"], "internal_error");
    assert_eq!(parsed["detail"], "Database operation failed");
  }

  #[test]
  fn inventory_conflict_names_the_meal() {
    let err = AppError::InsufficientInventory("Not enough Shakshuka available.".into());
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
    let parsed = body_json(err.error_response());
    assert_eq!(parsed["error"], "insufficient_inventory");
    assert!(parsed["detail"].as_str().unwrap().contains("Shakshuka"));
  }
}
