//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod recipes;
pub mod redirect;
pub mod shopping_cart;

pub use health::health_handler;
pub use recipes::{
    create_recipe_handler, delete_recipe_handler, get_link_handler, update_recipe_handler,
};
pub use redirect::redirect_handler;
pub use shopping_cart::{
    add_to_cart_handler, download_shopping_cart_handler, remove_from_cart_handler,
};
