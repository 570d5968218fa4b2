//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`RecipeRepository`] - Recipes and ingredient lines
//! - [`CartRepository`] - Shopping cart membership
//! - [`TokenRepository`] - API token authentication

pub mod cart_repository;
pub mod recipe_repository;
pub mod token_repository;

pub use cart_repository::CartRepository;
pub use recipe_repository::RecipeRepository;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use cart_repository::MockCartRepository;
#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
