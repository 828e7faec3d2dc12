// src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{auth_handlers, cart_handlers, catalog_handlers, order_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// The full (verb, path) -> handler table. Called from `main.rs` to
/// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes
      .service(
        web::scope("/auth")
          .route("/register", web::post().to(auth_handlers::register_handler))
          .route("/login", web::post().to(auth_handlers::login_handler)),
      )
      // Catalog Routes (public reads). The two-segment meal detail route
      // must be registered alongside the one-segment category route; they
      // never overlap because their segment counts differ.
      .service(
        web::scope("/meals")
          .route("", web::get().to(catalog_handlers::list_meals_handler))
          .route("/{category_slug}", web::get().to(catalog_handlers::category_detail_handler))
          .route(
            "/{category_slug}/{meal_slug}",
            web::get().to(catalog_handlers::meal_detail_handler),
          ),
      )
      // Cart Routes (authenticated)
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::view_cart_handler))
          .route("/add", web::put().to(cart_handlers::add_to_cart_handler))
          .route("/remove", web::post().to(cart_handlers::remove_from_cart_handler))
          .route("/items", web::get().to(cart_handlers::list_cart_items_handler))
          .route("/items/{item_id}", web::patch().to(cart_handlers::update_cart_item_handler))
          .route("/items/{item_id}", web::delete().to(cart_handlers::delete_cart_item_handler)),
      )
      // Order Routes (authenticated). Literal paths are registered before
      // the `{order_id}` match.
      .service(
        web::scope("/orders")
          .route("/make_order", web::post().to(order_handlers::make_order_handler))
          .route("/order_history", web::get().to(order_handlers::order_history_handler))
          .route("", web::get().to(order_handlers::order_history_handler))
          .route("/{order_id}", web::get().to(order_handlers::get_order_handler))
          .route("/{order_id}/items", web::get().to(order_handlers::list_order_items_handler)),
      ),
  );
}
