//! Folio Authentication
//!
//! This crate provides session-based authentication for the Folio admin
//! panel: constant-time credential verification, opaque session tokens
//! stored with a TTL, and helpers for moving tokens through cookies and
//! bearer headers.

pub mod credentials;
pub mod error;
pub mod service;
pub mod session;
pub mod token;

pub use credentials::AdminCredentials;
pub use error::AuthError;
pub use service::AuthService;
pub use session::{SESSION_TTL_SECONDS, Session, SessionStore};
pub use token::{
    SESSION_COOKIE, clear_session_cookie, extract_token, generate_token, session_cookie,
};
