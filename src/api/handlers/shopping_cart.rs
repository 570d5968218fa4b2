//! Handlers for the shopping cart and shopping list download.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;

use crate::api::dto::cart::CartEntryResponse;
use crate::application::services::{AuthUser, CartAddOutcome};
use crate::error::AppError;
use crate::state::AppState;

/// File name offered to the browser for the shopping list.
pub const SHOPPING_LIST_FILENAME: &str = "Shopping-list.txt";

/// Adds a recipe to the authenticated user's cart.
///
/// # Endpoint
///
/// `POST /api/recipes/{id}/shopping_cart`
///
/// # Errors
///
/// Returns 404 Not Found if the recipe does not exist.
/// Returns 400 Bad Request if the recipe is already in the cart.
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(recipe_id): Path<i64>,
) -> Result<(StatusCode, Json<CartEntryResponse>), AppError> {
    let recipe = match state.cart_service.add(user.user_id, recipe_id).await? {
        CartAddOutcome::Added(recipe) => recipe,
        CartAddOutcome::AlreadyPresent => {
            return Err(AppError::bad_request(
                "Recipe is already in the shopping cart",
                json!({ "id": recipe_id }),
            ));
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(CartEntryResponse {
            id: recipe.id,
            name: recipe.name,
            cooking_time: recipe.cooking_time,
            short_link: state.redirect_service.short_url(recipe.id),
        }),
    ))
}

/// Removes a recipe from the authenticated user's cart.
///
/// # Endpoint
///
/// `DELETE /api/recipes/{id}/shopping_cart`
///
/// # Errors
///
/// Returns 404 Not Found if the recipe does not exist.
/// Returns 400 Bad Request if the recipe is not in the cart.
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(recipe_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.cart_service.remove(user.user_id, recipe_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Downloads the aggregated shopping list as a text attachment.
///
/// # Endpoint
///
/// `GET /api/recipes/download_shopping_cart`
///
/// # Response
///
/// `text/plain` body, one header line followed by `{name} {amount} {unit}`
/// lines, sent with `Content-Disposition: attachment; filename="Shopping-list.txt"`.
pub async fn download_shopping_cart_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let body = state.shopping_list_service.download(user.user_id).await?;

    metrics::counter!("shopping_list_downloads_total").increment(1);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{SHOPPING_LIST_FILENAME}\""),
            ),
        ],
        body,
    ))
}
