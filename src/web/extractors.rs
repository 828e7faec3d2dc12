// src/web/extractors.rs

//! Request extractors shared across handlers.

use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::warn;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated caller, resolved from an `Authorization: Bearer
/// <token>` header against the sessions table. Handlers that take this
/// extractor reject unauthenticated requests with a 401 before running.
#[derive(Debug)]
pub struct AuthenticatedUser {
  pub user_id: Uuid,
}

fn bearer_token(req: &HttpRequest) -> Option<Uuid> {
  let header_value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
  let token = header_value.strip_prefix("Bearer ")?;
  Uuid::parse_str(token.trim()).ok()
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let app_state = req.app_data::<web::Data<AppState>>().cloned();
    let token = bearer_token(req);

    Box::pin(async move {
      let app_state =
        app_state.ok_or_else(|| AppError::Internal("AppState is not configured on the App.".to_string()))?;
      let token = token.ok_or_else(|| {
        warn!("AuthenticatedUser extractor: missing or malformed Authorization header.");
        AppError::Auth("User authentication required. Send 'Authorization: Bearer <token>'.".to_string())
      })?;

      match db::users::find_session_user(&app_state.db_pool, token).await? {
        Some(user) => Ok(AuthenticatedUser { user_id: user.id }),
        None => {
          warn!("AuthenticatedUser extractor: unknown session token.");
          Err(AppError::Auth("Invalid or expired session token.".to_string()))
        }
      }
    })
  }
}
