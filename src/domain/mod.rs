//! Domain layer: entities, repository contracts and pure business rules.
//!
//! Nothing in here depends on HTTP or SQL. Repository traits are implemented
//! by [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].
//!
//! - [`entities`] - Recipes, ingredient lines and cart entries
//! - [`repositories`] - Data access traits
//! - [`shopping_list`] - Ingredient aggregation and text rendering

pub mod entities;
pub mod repositories;
pub mod shopping_list;
