//! Request middleware shared by the API and redirect routes.
//!
//! - [`auth`] - Bearer token authentication for `/api` write routes
//! - [`rate_limit`] - Per-client token bucket quotas
//! - [`tracing`] - Request spans and latency logging

pub mod auth;
pub mod rate_limit;
pub mod tracing;
