//! Folio REST API
//!
//! This crate provides the Axum-based HTTP API for Folio: the public
//! content endpoints, the contact form, and the session-protected
//! management endpoints.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, MetricsHandle};
