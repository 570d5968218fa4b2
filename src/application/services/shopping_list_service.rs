//! Shopping list generation for a user's cart.

use std::sync::Arc;

use crate::domain::repositories::{CartRepository, RecipeRepository};
use crate::domain::shopping_list::{self, ShoppingListItem};
use crate::error::AppError;
use tracing::debug;

/// Service building the aggregated shopping list of a user.
///
/// Storage errors from either repository are returned unchanged; the service
/// adds no failure modes of its own.
pub struct ShoppingListService<C, R>
where
    C: CartRepository + ?Sized,
    R: RecipeRepository + ?Sized,
{
    cart_repository: Arc<C>,
    recipe_repository: Arc<R>,
}

impl<C, R> ShoppingListService<C, R>
where
    C: CartRepository + ?Sized,
    R: RecipeRepository + ?Sized,
{
    /// Creates a new shopping list service.
    pub fn new(cart_repository: Arc<C>, recipe_repository: Arc<R>) -> Self {
        Self {
            cart_repository,
            recipe_repository,
        }
    }

    /// Sums ingredient amounts across every recipe in the user's cart.
    ///
    /// An empty cart returns an empty list without querying ingredients.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn aggregate_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<ShoppingListItem>, AppError> {
        let recipe_ids: Vec<i64> = self
            .cart_repository
            .list_entries(user_id)
            .await?
            .into_iter()
            .map(|entry| entry.recipe_id)
            .collect();

        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let lines = self
            .recipe_repository
            .list_ingredient_lines(&recipe_ids)
            .await?;

        debug!(
            user_id,
            recipes = recipe_ids.len(),
            lines = lines.len(),
            "Aggregating shopping list"
        );

        Ok(shopping_list::aggregate(lines))
    }

    /// Renders the user's shopping list as the downloadable text document.
    ///
    /// # Errors
    ///
    /// See [`Self::aggregate_for_user`].
    pub async fn download(&self, user_id: i64) -> Result<String, AppError> {
        let items = self.aggregate_for_user(user_id).await?;
        Ok(shopping_list::render(&items))
    }
}
