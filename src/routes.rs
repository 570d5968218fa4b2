//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /s/{code}` - Short link redirect (public)
//! - `GET  /health`   - Health check (public)
//! - `/api/*`         - REST API (some routes require a Bearer token)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Authentication** - Bearer token on protected API routes

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, Tier};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Path normalization is applied by the server around the finished router,
/// so the returned value can still be layered by tests.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> Router {
    let protected_api = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    let protected_api = rate_limit::apply(protected_api, Tier::Authenticated, behind_proxy);

    let public_api = rate_limit::apply(api::routes::public_routes(), Tier::Public, behind_proxy);

    let public = Router::new()
        .route("/s/{code}", get(redirect_handler))
        .route("/health", get(health_handler));
    let public = rate_limit::apply(public, Tier::Public, behind_proxy);

    Router::new()
        .merge(public)
        .nest("/api", Router::new().merge(public_api).merge(protected_api))
        .with_state(state)
        .layer(tracing::layer())
}
