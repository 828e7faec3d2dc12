// src/models/mod.rs

//! Data structures representing database entities, plus the serialized
//! views the API returns for carts and orders.

pub mod cart;
pub mod cart_item;
pub mod category;
pub mod meal;
pub mod order;
pub mod order_item;
pub mod session;
pub mod user;

pub use cart::{Cart, CartLine, CartView};
pub use cart_item::CartItem;
pub use category::{Category, CategoryView};
pub use meal::Meal;
pub use order::{Order, OrderView};
pub use order_item::{OrderItem, OrderLine};
pub use session::Session;
pub use user::User;
