// src/db/catalog.rs

//! Read-only catalog queries.

use crate::errors::Result;
use crate::models::{Category, CategoryView, Meal};
use sqlx::PgPool;

const MEAL_COLUMNS: &str =
  "id, category_id, title, slug, description, price, available_inventory, created_at, updated_at";

pub async fn list_meals(pool: &PgPool) -> Result<Vec<Meal>> {
  let meals = sqlx::query_as::<_, Meal>(&format!("SELECT {} FROM meals ORDER BY title ASC", MEAL_COLUMNS))
    .fetch_all(pool)
    .await?;
  Ok(meals)
}

/// Looks up a meal by its `(category slug, meal slug)` pair.
pub async fn find_meal_by_slugs(pool: &PgPool, category_slug: &str, meal_slug: &str) -> Result<Option<Meal>> {
  let meal = sqlx::query_as::<_, Meal>(
    "SELECT m.id, m.category_id, m.title, m.slug, m.description, m.price, m.available_inventory, \
            m.created_at, m.updated_at \
     FROM meals m JOIN categories c ON c.id = m.category_id \
     WHERE c.slug = $1 AND m.slug = $2",
  )
  .bind(category_slug)
  .bind(meal_slug)
  .fetch_optional(pool)
  .await?;
  Ok(meal)
}

/// Category detail: the category row plus its meals, or `None` on an
/// unknown slug.
pub async fn find_category_by_slug(pool: &PgPool, slug: &str) -> Result<Option<CategoryView>> {
  let category = sqlx::query_as::<_, Category>("SELECT id, name, slug, created_at FROM categories WHERE slug = $1")
    .bind(slug)
    .fetch_optional(pool)
    .await?;

  let Some(category) = category else {
    return Ok(None);
  };

  let meals = sqlx::query_as::<_, Meal>(&format!(
    "SELECT {} FROM meals WHERE category_id = $1 ORDER BY title ASC",
    MEAL_COLUMNS
  ))
  .bind(category.id)
  .fetch_all(pool)
  .await?;

  Ok(Some(CategoryView { category, meals }))
}
