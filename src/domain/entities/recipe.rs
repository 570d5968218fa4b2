//! Recipe entity and its ingredient lines.

use chrono::{DateTime, Utc};

/// A published recipe.
///
/// `id` is assigned by the database on insert and never changes, which is
/// what keeps the recipe's short code stable.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: i64,
    pub author_id: i64,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub tag_ids: Vec<i64>,
    pub ingredients: Vec<IngredientLine>,
    pub created_at: DateTime<Utc>,
}

/// Recipe row without tags or ingredient lines.
///
/// Enough to authorize an author-only change and to echo a cart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: i64,
    pub author_id: i64,
    pub name: String,
    pub cooking_time: i32,
}

/// One `(ingredient, amount, unit)` requirement of a recipe.
///
/// A recipe may list the same ingredient more than once; nothing here
/// deduplicates lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub recipe_id: i64,
    pub ingredient_name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

impl IngredientLine {
    pub fn new(
        recipe_id: i64,
        ingredient_name: impl Into<String>,
        measurement_unit: impl Into<String>,
        amount: u32,
    ) -> Self {
        Self {
            recipe_id,
            ingredient_name: ingredient_name.into(),
            measurement_unit: measurement_unit.into(),
            amount,
        }
    }
}

/// Validated input for creating or replacing a recipe.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub tag_ids: Vec<i64>,
    pub ingredients: Vec<NewIngredientAmount>,
}

/// Reference to a catalog ingredient with the amount the recipe needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewIngredientAmount {
    pub ingredient_id: i64,
    pub amount: u32,
}

impl NewRecipe {
    /// Catalog ids of every ingredient, in request order.
    pub fn ingredient_ids(&self) -> Vec<i64> {
        self.ingredients.iter().map(|i| i.ingredient_id).collect()
    }
}
