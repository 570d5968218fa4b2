//! Business logic services for the application layer.

pub mod auth_service;
pub mod cart_service;
pub mod recipe_service;
pub mod redirect_service;
pub mod shopping_list_service;

pub use auth_service::{AuthService, AuthUser};
pub use cart_service::{CartAddOutcome, CartService};
pub use recipe_service::RecipeService;
pub use redirect_service::{RedirectService, RedirectTarget, unresolved_link};
pub use shopping_list_service::ShoppingListService;
