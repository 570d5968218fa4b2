//! API route configuration.

use crate::api::handlers::{
    add_to_cart_handler, create_recipe_handler, delete_recipe_handler,
    download_shopping_cart_handler, get_link_handler, remove_from_cart_handler,
    update_recipe_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// API routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /recipes`                        - Publish a recipe
/// - `PATCH  /recipes/{id}`                   - Replace an own recipe
/// - `DELETE /recipes/{id}`                   - Delete an own recipe
/// - `POST   /recipes/{id}/shopping_cart`     - Add a recipe to the cart
/// - `DELETE /recipes/{id}/shopping_cart`     - Remove a recipe from the cart
/// - `GET    /recipes/download_shopping_cart` - Download the shopping list
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", post(create_recipe_handler))
        .route(
            "/recipes/{id}",
            patch(update_recipe_handler).delete(delete_recipe_handler),
        )
        .route(
            "/recipes/download_shopping_cart",
            get(download_shopping_cart_handler),
        )
        .route(
            "/recipes/{id}/shopping_cart",
            post(add_to_cart_handler).delete(remove_from_cart_handler),
        )
}

/// API routes open to anonymous clients.
///
/// - `GET /recipes/{id}/get-link` - Short link of a recipe
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/recipes/{id}/get-link", get(get_link_handler))
}
