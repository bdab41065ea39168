//! Quotes API
//!
//! HTTP boundary for the Dev Quotes service: router, handlers, and
//! shared application state.

pub mod handlers;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod pagination;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
