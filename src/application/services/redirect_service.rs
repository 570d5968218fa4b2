//! Short link resolution.

use std::sync::Arc;

use crate::domain::repositories::RecipeRepository;
use crate::error::AppError;
use crate::utils::short_code;
use serde_json::json;
use tracing::debug;

/// Where a short link points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub recipe_id: i64,
    pub url: String,
}

/// Service turning short codes into canonical recipe URLs.
///
/// Malformed codes and codes of missing recipes produce the same
/// [`AppError::NotFound`], so callers cannot tell which ids exist.
pub struct RedirectService<R: RecipeRepository + ?Sized> {
    recipe_repository: Arc<R>,
    public_base_url: String,
}

impl<R: RecipeRepository + ?Sized> RedirectService<R> {
    /// Creates a new redirect service.
    ///
    /// `public_base_url` is the externally visible origin, e.g.
    /// `https://foodgram.example.com`.
    pub fn new(recipe_repository: Arc<R>, public_base_url: impl Into<String>) -> Self {
        Self {
            recipe_repository,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves a short code to the canonical URL of its recipe.
    ///
    /// Performs a single existence lookup and has no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not decode or the
    /// recipe does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<RedirectTarget, AppError> {
        let Ok(recipe_id) = short_code::decode(code) else {
            debug!(code, "Rejected malformed short code");
            return Err(Self::not_found());
        };

        if !self.recipe_repository.exists(recipe_id).await? {
            debug!(code, recipe_id, "Short code points to missing recipe");
            return Err(Self::not_found());
        }

        Ok(RedirectTarget {
            recipe_id,
            url: self.canonical_url(recipe_id),
        })
    }

    /// Returns the short URL of an existing recipe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the recipe does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, recipe_id: i64) -> Result<String, AppError> {
        if !self.recipe_repository.exists(recipe_id).await? {
            return Err(Self::not_found());
        }

        Ok(self.short_url(recipe_id))
    }

    /// Canonical URL of a recipe: `{base}/recipes/{id}`.
    pub fn canonical_url(&self, recipe_id: i64) -> String {
        format!("{}/recipes/{}", self.public_base_url, recipe_id)
    }

    /// Shareable short URL of a recipe: `{base}/s/{code}`.
    pub fn short_url(&self, recipe_id: i64) -> String {
        format!(
            "{}/s/{}",
            self.public_base_url,
            short_code::encode(recipe_id)
        )
    }

    fn not_found() -> AppError {
        unresolved_link()
    }
}

/// The single error every unresolvable short link maps to.
///
/// Malformed, undecodable and unknown codes must stay indistinguishable.
pub fn unresolved_link() -> AppError {
    AppError::not_found("Recipe not found", json!({}))
}
