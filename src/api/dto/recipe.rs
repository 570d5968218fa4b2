//! DTOs for recipe endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{IngredientLine, NewIngredientAmount, NewRecipe, Recipe};
use crate::error::AppError;
use crate::utils::validation::{validate_amount, validate_cooking_time};

/// Request to publish a recipe.
///
/// Amounts and cooking time arrive as signed integers so that negative input
/// is reported as a validation error instead of a JSON parse failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecipeRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    pub cooking_time: i64,

    #[serde(default)]
    pub tags: Vec<i64>,

    #[validate(length(min = 1, message = "At least one ingredient is required"))]
    pub ingredients: Vec<IngredientAmountItem>,
}

/// One ingredient reference in a [`CreateRecipeRequest`].
#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientAmountItem {
    pub id: i64,
    pub amount: i64,
}

impl CreateRecipeRequest {
    /// Applies field predicates and converts to the domain input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a non-positive amount or a cooking
    /// time outside `1..=5000`.
    pub fn into_new_recipe(self) -> Result<NewRecipe, AppError> {
        let cooking_time = validate_cooking_time(self.cooking_time)?;

        let ingredients = self
            .ingredients
            .into_iter()
            .map(|item| {
                Ok(NewIngredientAmount {
                    ingredient_id: item.id,
                    amount: validate_amount(item.amount)?,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(NewRecipe {
            name: self.name,
            text: self.text,
            cooking_time,
            tag_ids: self.tags,
            ingredients,
        })
    }
}

/// Recipe as returned by the API.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub author: i64,
    pub name: String,
    pub text: String,
    pub cooking_time: i32,
    pub tags: Vec<i64>,
    pub ingredients: Vec<IngredientLineResponse>,
    pub short_link: String,
    pub created_at: DateTime<Utc>,
}

/// Ingredient line inside a [`RecipeResponse`].
#[derive(Debug, Serialize)]
pub struct IngredientLineResponse {
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

impl From<IngredientLine> for IngredientLineResponse {
    fn from(line: IngredientLine) -> Self {
        Self {
            name: line.ingredient_name,
            measurement_unit: line.measurement_unit,
            amount: line.amount,
        }
    }
}

impl RecipeResponse {
    pub fn new(recipe: Recipe, short_link: String) -> Self {
        Self {
            id: recipe.id,
            author: recipe.author_id,
            name: recipe.name,
            text: recipe.text,
            cooking_time: recipe.cooking_time,
            tags: recipe.tag_ids,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
            short_link,
            created_at: recipe.created_at,
        }
    }
}

/// Response of `GET /api/recipes/{id}/get-link`.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    #[serde(rename = "short-link")]
    pub short_link: String,
}
