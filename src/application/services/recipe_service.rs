//! Recipe publishing, author-only edits and lookup.

use std::sync::Arc;

use crate::domain::entities::{NewRecipe, Recipe, RecipeSummary};
use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;
use crate::utils::validation::validate_unique_ids;
use serde_json::json;
use tracing::info;

/// Service for publishing recipes.
pub struct RecipeService<R: RecipeRepository + ?Sized> {
    recipe_repository: Arc<R>,
}

impl<R: RecipeRepository + ?Sized> RecipeService<R> {
    /// Creates a new recipe service.
    pub fn new(recipe_repository: Arc<R>) -> Self {
        Self { recipe_repository }
    }

    /// Publishes a recipe on behalf of `author_id`.
    ///
    /// Field-level checks (amounts, cooking time) have already run when the
    /// request was converted into a [`NewRecipe`]. This method checks the
    /// cross-field and catalog rules.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - The recipe has no ingredients
    /// - An ingredient or tag id is listed twice
    /// - An ingredient or tag id does not exist
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_recipe(
        &self,
        author_id: i64,
        new_recipe: NewRecipe,
    ) -> Result<Recipe, AppError> {
        self.check_contents(&new_recipe).await?;

        let recipe = self
            .recipe_repository
            .create(author_id, new_recipe)
            .await?;

        info!(recipe_id = recipe.id, author_id, "Recipe created");

        Ok(recipe)
    }

    /// Replaces a recipe's contents. Only its author may do this.
    ///
    /// The id is kept, so the recipe's short link does not change.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Forbidden`] if `user_id` is not the author.
    /// Returns [`AppError::Validation`] under the same rules as
    /// [`Self::create_recipe`].
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_recipe(
        &self,
        user_id: i64,
        recipe_id: i64,
        new_recipe: NewRecipe,
    ) -> Result<Recipe, AppError> {
        self.authorize_author(user_id, recipe_id).await?;
        self.check_contents(&new_recipe).await?;

        let recipe = self
            .recipe_repository
            .update(recipe_id, new_recipe)
            .await?
            .ok_or_else(|| not_found(recipe_id))?;

        info!(recipe_id, user_id, "Recipe updated");

        Ok(recipe)
    }

    /// Deletes a recipe. Only its author may do this.
    ///
    /// Its short link resolves to 404 from then on.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Forbidden`] if `user_id` is not the author.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_recipe(&self, user_id: i64, recipe_id: i64) -> Result<(), AppError> {
        self.authorize_author(user_id, recipe_id).await?;

        if !self.recipe_repository.delete(recipe_id).await? {
            return Err(not_found(recipe_id));
        }

        info!(recipe_id, user_id, "Recipe deleted");
        Ok(())
    }

    async fn authorize_author(
        &self,
        user_id: i64,
        recipe_id: i64,
    ) -> Result<RecipeSummary, AppError> {
        let summary = self
            .recipe_repository
            .find_summary(recipe_id)
            .await?
            .ok_or_else(|| not_found(recipe_id))?;

        if summary.author_id != user_id {
            return Err(AppError::forbidden(
                "Only the author can change this recipe",
                json!({ "id": recipe_id }),
            ));
        }

        Ok(summary)
    }

    async fn check_contents(&self, new_recipe: &NewRecipe) -> Result<(), AppError> {
        if new_recipe.ingredients.is_empty() {
            return Err(AppError::bad_request(
                "Recipe must have at least one ingredient",
                json!({ "field": "ingredients" }),
            ));
        }

        let ingredient_ids = new_recipe.ingredient_ids();
        validate_unique_ids(&ingredient_ids, "ingredients")?;
        validate_unique_ids(&new_recipe.tag_ids, "tags")?;

        let missing = self
            .recipe_repository
            .missing_ingredients(&ingredient_ids)
            .await?;
        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "Unknown ingredients",
                json!({ "field": "ingredients", "missing": missing }),
            ));
        }

        if !new_recipe.tag_ids.is_empty() {
            let missing = self
                .recipe_repository
                .missing_tags(&new_recipe.tag_ids)
                .await?;
            if !missing.is_empty() {
                return Err(AppError::bad_request(
                    "Unknown tags",
                    json!({ "field": "tags", "missing": missing }),
                ));
            }
        }

        Ok(())
    }

    /// Checks that the recipe store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.recipe_repository.ping().await
    }
}

fn not_found(recipe_id: i64) -> AppError {
    AppError::not_found("Recipe not found", json!({ "id": recipe_id }))
}
