//! Handlers for recipe publishing, author-only edits and short link lookup.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::recipe::{CreateRecipeRequest, RecipeResponse, ShortLinkResponse};
use crate::application::services::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Publishes a recipe for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/recipes`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Pancakes",
///   "text": "Mix and fry",
///   "cooking_time": 20,
///   "tags": [1, 2],
///   "ingredients": [{ "id": 10, "amount": 200 }]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for invalid fields, non-positive amounts,
/// duplicate or unknown ingredients and tags.
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), AppError> {
    payload.validate()?;
    let new_recipe = payload.into_new_recipe()?;

    let recipe = state
        .recipe_service
        .create_recipe(user.user_id, new_recipe)
        .await?;

    let short_link = state.redirect_service.short_url(recipe.id);

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse::new(recipe, short_link)),
    ))
}

/// Replaces a recipe authored by the authenticated user.
///
/// # Endpoint
///
/// `PATCH /api/recipes/{id}`
///
/// Takes the same body as [`create_recipe_handler`]. The recipe keeps its id
/// and therefore its short link.
///
/// # Errors
///
/// Returns 400 Bad Request under the same rules as creation.
/// Returns 403 Forbidden if the user is not the author.
/// Returns 404 Not Found if the recipe does not exist.
pub async fn update_recipe_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(recipe_id): Path<i64>,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<Json<RecipeResponse>, AppError> {
    payload.validate()?;
    let new_recipe = payload.into_new_recipe()?;

    let recipe = state
        .recipe_service
        .update_recipe(user.user_id, recipe_id, new_recipe)
        .await?;

    let short_link = state.redirect_service.short_url(recipe.id);

    Ok(Json(RecipeResponse::new(recipe, short_link)))
}

/// Deletes a recipe authored by the authenticated user.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}`
///
/// # Errors
///
/// Returns 403 Forbidden if the user is not the author.
/// Returns 404 Not Found if the recipe does not exist.
pub async fn delete_recipe_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(recipe_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .recipe_service
        .delete_recipe(user.user_id, recipe_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the shareable short link of a recipe.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}/get-link`
///
/// # Response
///
/// ```json
/// { "short-link": "https://foodgram.example.com/s/9n2jq" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the recipe does not exist.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let short_link = state.redirect_service.get_link(recipe_id).await?;

    Ok(Json(ShortLinkResponse { short_link }))
}
