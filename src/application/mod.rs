//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation and business rules, and
//! give HTTP handlers a narrow API. Each service holds its repositories as
//! `Arc<R>` so the same service type runs against PostgreSQL in production and
//! against mocks in unit tests.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Short code resolution
//! - [`services::shopping_list_service::ShoppingListService`] - Cart ingredient aggregation
//! - [`services::recipe_service::RecipeService`] - Recipe publishing
//! - [`services::cart_service::CartService`] - Cart membership
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod services;
