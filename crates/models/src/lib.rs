//! Domain types for per-country onboarding requirement configurations.
//! - Defines the persisted record shape and the request input shapes.
//! - Hosts the pure validation/normalization functions the service relies on.

pub mod configuration;
pub mod errors;
