//! Handler for short link redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::application::services::unresolved_link;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to the canonical recipe URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Responses
///
/// - **302 Found** with `Location: {base}/recipes/{id}`
/// - **404 Not Found** for malformed codes (including ones that do not
///   percent-decode to UTF-8) and codes of missing recipes alike
pub async fn redirect_handler(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let result = match code {
        Ok(Path(code)) => state.redirect_service.resolve(&code).await,
        Err(rejection) => {
            debug!(%rejection, "Rejected undecodable short code");
            Err(unresolved_link())
        }
    };

    match result {
        Ok(target) => {
            metrics::counter!("short_link_redirects_total", "outcome" => "hit").increment(1);
            debug!(recipe_id = target.recipe_id, "Redirecting short link");
            Ok((StatusCode::FOUND, [(header::LOCATION, target.url)]).into_response())
        }
        Err(err @ AppError::NotFound { .. }) => {
            metrics::counter!("short_link_redirects_total", "outcome" => "miss").increment(1);
            Err(err)
        }
        Err(err) => Err(err),
    }
}
