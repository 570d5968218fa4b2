//! Core domain entities.
//!
//! Entities are plain data. Creation inputs live next to the entity they
//! produce (`NewRecipe` for [`Recipe`]).
//!
//! - [`Recipe`] - A published recipe with its ingredient lines
//! - [`RecipeSummary`] - The recipe row alone
//! - [`IngredientLine`] - One ingredient requirement of a recipe
//! - [`CartEntry`] - A recipe in a user's shopping cart

pub mod cart;
pub mod recipe;

pub use cart::CartEntry;
pub use recipe::{IngredientLine, NewIngredientAmount, NewRecipe, Recipe, RecipeSummary};
