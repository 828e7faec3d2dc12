// src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::db;
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_meals", skip(app_state))]
pub async fn list_meals_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let meals = db::catalog::list_meals(&app_state.db_pool).await?;
  info!("Successfully fetched {} meals.", meals.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Meals fetched successfully.",
      "meals": meals
  })))
}

#[instrument(name = "handler::meal_detail", skip(app_state, path))]
pub async fn meal_detail_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
  let (category_slug, meal_slug) = path.into_inner();
  info!("Fetching meal detail for {}/{}.", category_slug, meal_slug);

  match db::catalog::find_meal_by_slugs(&app_state.db_pool, &category_slug, &meal_slug).await? {
    Some(meal) => Ok(HttpResponse::Ok().json(json!({
        "message": "Meal fetched successfully.",
        "meal": meal
    }))),
    None => {
      warn!("No meal for slug pair {}/{}.", category_slug, meal_slug);
      Err(AppError::NotFound(format!(
        "Meal '{}' in category '{}' not found.",
        meal_slug, category_slug
      )))
    }
  }
}

#[instrument(name = "handler::category_detail", skip(app_state, path), fields(category_slug = %path.as_ref()))]
pub async fn category_detail_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category_slug = path.into_inner();

  match db::catalog::find_category_by_slug(&app_state.db_pool, &category_slug).await? {
    Some(category) => Ok(HttpResponse::Ok().json(json!({
        "message": "Category fetched successfully.",
        "category": category
    }))),
    None => {
      warn!("Category with slug '{}' not found.", category_slug);
      Err(AppError::NotFound(format!("Category '{}' not found.", category_slug)))
    }
  }
}
