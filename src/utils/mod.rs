//! Pure helpers shared across layers.
//!
//! - [`short_code`] - Reversible recipe id <-> short code mapping
//! - [`validation`] - Input predicates for request payloads

pub mod short_code;
pub mod validation;
