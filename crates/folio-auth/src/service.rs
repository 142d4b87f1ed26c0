//! Auth service
//!
//! Orchestrates login (verify credentials, mint session) and logout
//! (revoke session).

use std::sync::Arc;
use tracing::{debug, info};

use folio_store::ContentStore;

use crate::credentials::AdminCredentials;
use crate::error::AuthError;
use crate::session::SessionStore;

/// The single operator identity sessions are issued for.
const ADMIN_USER_ID: &str = "admin";

#[derive(Clone)]
pub struct AuthService {
    credentials: AdminCredentials,
    sessions: SessionStore,
}

impl AuthService {
    pub fn new(credentials: AdminCredentials, store: Arc<dyn ContentStore>) -> Self {
        Self {
            credentials,
            sessions: SessionStore::new(store),
        }
    }

    /// Verify credentials and create a session, returning its token.
    ///
    /// Both a wrong email and a wrong password produce the same
    /// `InvalidCredentials` error so a caller cannot probe which half
    /// was wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        if !self.credentials.verify_email(email) {
            debug!("Login rejected: email mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        if !self.credentials.verify_password(password) {
            debug!("Login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.create(ADMIN_USER_ID).await?;
        info!("Admin logged in");
        Ok(token)
    }

    /// Revoke a session. Safe to call with an already-invalid token.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.sessions.clear(token).await?;
        info!("Admin logged out");
        Ok(())
    }

    /// Check whether a token refers to a live session.
    pub async fn verify(&self, token: &str) -> Result<bool, AuthError> {
        self.sessions.verify(token).await
    }
}
