//! Repository trait for shopping cart membership.

use crate::domain::entities::CartEntry;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users' shopping carts.
///
/// A cart is a set of recipes: adding a recipe twice leaves one entry.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCartRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Lists every cart entry of a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_entries(&self, user_id: i64) -> Result<Vec<CartEntry>, AppError>;

    /// Adds a recipe to the cart.
    ///
    /// Returns `Ok(true)` if the entry was created, `Ok(false)` if it was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;

    /// Removes a recipe from the cart.
    ///
    /// Returns `Ok(true)` if an entry was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn remove(&self, user_id: i64, recipe_id: i64) -> Result<bool, AppError>;
}
