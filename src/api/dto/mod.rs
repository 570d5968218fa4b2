//! Data Transfer Objects for API requests and responses.
//!
//! Each DTO lists its fields explicitly; handlers build them from domain
//! entities by hand. Request DTOs use `validator` for field checks.

pub mod cart;
pub mod health;
pub mod recipe;
