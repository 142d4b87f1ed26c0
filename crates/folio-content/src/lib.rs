//! Folio Content Model
//!
//! Typed entities for the portfolio content documents, the fixed store
//! keys they live under, per-entity batch validation, and the ordering
//! rules the public site renders with.

pub mod keys;
pub mod models;
pub mod order;
pub mod validate;

pub use keys::*;
pub use models::*;
pub use validate::ValidationError;
