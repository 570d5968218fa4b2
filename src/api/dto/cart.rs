//! DTOs for shopping cart endpoints.

use serde::Serialize;

/// Response of a successful `POST /api/recipes/{id}/shopping_cart`.
#[derive(Debug, Serialize)]
pub struct CartEntryResponse {
    pub id: i64,
    pub name: String,
    pub cooking_time: i32,
    pub short_link: String,
}
