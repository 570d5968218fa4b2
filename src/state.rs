//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CartService, RecipeService, RedirectService, ShoppingListService,
};
use crate::domain::repositories::{CartRepository, RecipeRepository, TokenRepository};

/// Services wired to their repositories.
///
/// Repositories are held as trait objects.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<dyn RecipeRepository>>,
    pub shopping_list_service: Arc<ShoppingListService<dyn CartRepository, dyn RecipeRepository>>,
    pub recipe_service: Arc<RecipeService<dyn RecipeRepository>>,
    pub cart_service: Arc<CartService<dyn CartRepository, dyn RecipeRepository>>,
    pub auth_service: Arc<AuthService<dyn TokenRepository>>,
}

impl AppState {
    /// Builds every service from the three repositories.
    ///
    /// # Arguments
    ///
    /// - `public_base_url` - externally visible origin used for canonical and short URLs
    /// - `token_signing_secret` - HMAC key for bearer token hashing
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        carts: Arc<dyn CartRepository>,
        tokens: Arc<dyn TokenRepository>,
        public_base_url: &str,
        token_signing_secret: String,
    ) -> Self {
        Self {
            redirect_service: Arc::new(RedirectService::new(recipes.clone(), public_base_url)),
            shopping_list_service: Arc::new(ShoppingListService::new(
                carts.clone(),
                recipes.clone(),
            )),
            recipe_service: Arc::new(RecipeService::new(recipes.clone())),
            cart_service: Arc::new(CartService::new(carts, recipes)),
            auth_service: Arc::new(AuthService::new(tokens, token_signing_secret)),
        }
    }
}
