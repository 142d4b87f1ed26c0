//! Folio Content Store
//!
//! This crate provides the key-value store abstraction for Folio,
//! supporting an in-memory backend and a Redis-compatible REST backend.

pub mod backend;
pub mod error;
pub mod memory;
pub mod rest;

pub use backend::{ContentStore, read_record, write_record};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::{RestStore, RestStoreConfig};
