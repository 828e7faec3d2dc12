// src/models/category.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::meal::Meal;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
  pub id: Uuid,
  pub name: String,
  pub slug: String,
  pub created_at: DateTime<Utc>,
}

/// Category detail as returned by the API: the category plus its meals.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
  #[serde(flatten)]
  pub category: Category,
  pub meals: Vec<Meal>,
}
