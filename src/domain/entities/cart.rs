//! Shopping cart membership.

use chrono::{DateTime, Utc};

/// A recipe placed in a user's shopping cart.
///
/// The cart is a set: a `(user_id, recipe_id)` pair exists at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub user_id: i64,
    pub recipe_id: i64,
    pub added_at: DateTime<Utc>,
}
