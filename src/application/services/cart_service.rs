//! Shopping cart membership management.

use std::sync::Arc;

use crate::domain::entities::RecipeSummary;
use crate::domain::repositories::{CartRepository, RecipeRepository};
use crate::error::AppError;
use serde_json::json;
use tracing::info;

/// Result of adding a recipe to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAddOutcome {
    /// The recipe was put into the cart. Carries the row read before the
    /// insert.
    Added(RecipeSummary),
    AlreadyPresent,
}

/// Service for adding recipes to and removing them from a user's cart.
pub struct CartService<C, R>
where
    C: CartRepository + ?Sized,
    R: RecipeRepository + ?Sized,
{
    cart_repository: Arc<C>,
    recipe_repository: Arc<R>,
}

impl<C, R> CartService<C, R>
where
    C: CartRepository + ?Sized,
    R: RecipeRepository + ?Sized,
{
    /// Creates a new cart service.
    pub fn new(cart_repository: Arc<C>, recipe_repository: Arc<R>) -> Self {
        Self {
            cart_repository,
            recipe_repository,
        }
    }

    /// Puts a recipe into the user's cart.
    ///
    /// The recipe row is read once, before the insert. Adding a recipe that
    /// is already in the cart changes nothing and reports
    /// [`CartAddOutcome::AlreadyPresent`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add(&self, user_id: i64, recipe_id: i64) -> Result<CartAddOutcome, AppError> {
        let summary = self
            .recipe_repository
            .find_summary(recipe_id)
            .await?
            .ok_or_else(|| AppError::not_found("Recipe not found", json!({ "id": recipe_id })))?;

        if self.cart_repository.add(user_id, recipe_id).await? {
            info!(user_id, recipe_id, "Recipe added to shopping cart");
            Ok(CartAddOutcome::Added(summary))
        } else {
            Ok(CartAddOutcome::AlreadyPresent)
        }
    }

    /// Takes a recipe out of the user's cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Validation`] if the recipe is not in the cart.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<(), AppError> {
        if !self.recipe_repository.exists(recipe_id).await? {
            return Err(AppError::not_found(
                "Recipe not found",
                json!({ "id": recipe_id }),
            ));
        }

        if !self.cart_repository.remove(user_id, recipe_id).await? {
            return Err(AppError::bad_request(
                "Recipe is not in the shopping cart",
                json!({ "id": recipe_id }),
            ));
        }

        info!(user_id, recipe_id, "Recipe removed from shopping cart");
        Ok(())
    }
}
