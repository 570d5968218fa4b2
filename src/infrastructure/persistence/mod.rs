//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries mapped through `sqlx::FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgRecipeRepository`] - Recipes, tags and ingredient lines
//! - [`PgCartRepository`] - Shopping cart membership
//! - [`PgTokenRepository`] - API token lookup

pub mod pg_cart_repository;
pub mod pg_recipe_repository;
pub mod pg_token_repository;

pub use pg_cart_repository::PgCartRepository;
pub use pg_recipe_repository::PgRecipeRepository;
pub use pg_token_repository::PgTokenRepository;
