//! Repository trait for recipe data access.

use crate::domain::entities::{IngredientLine, NewRecipe, Recipe, RecipeSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recipes and their ingredient lines.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRecipeRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Finds a recipe by id, including tag ids and ingredient lines.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, AppError>;

    /// Loads the recipe row alone, in one query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_summary(&self, id: i64) -> Result<Option<RecipeSummary>, AppError>;

    /// Checks whether a recipe with this id exists.
    ///
    /// Cheaper than [`Self::find_by_id`]; used on the redirect path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Lists ingredient lines of every given recipe.
    ///
    /// Unknown ids contribute nothing. Lines repeated within a recipe are
    /// returned as separate rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_ingredient_lines(
        &self,
        recipe_ids: &[i64],
    ) -> Result<Vec<IngredientLine>, AppError>;

    /// Returns the ingredient ids that are not in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn missing_ingredients(&self, ingredient_ids: &[i64]) -> Result<Vec<i64>, AppError>;

    /// Returns the tag ids that do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn missing_tags(&self, tag_ids: &[i64]) -> Result<Vec<i64>, AppError>;

    /// Persists a recipe with its tags and ingredient lines atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced ingredient, tag or
    /// author vanished concurrently.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, author_id: i64, new_recipe: NewRecipe) -> Result<Recipe, AppError>;

    /// Replaces a recipe's fields, tags and ingredient lines atomically.
    ///
    /// The id, author and creation time are kept. Returns `None` if the
    /// recipe no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a referenced ingredient or tag
    /// vanished concurrently.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, new_recipe: NewRecipe) -> Result<Option<Recipe>, AppError>;

    /// Deletes a recipe. Its tags, ingredient lines and cart entries go
    /// with it.
    ///
    /// Returns `false` if the recipe did not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Round-trips to the store; used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
