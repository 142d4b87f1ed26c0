//! Session store
//!
//! Sessions are opaque server-side records: the client only ever holds the
//! random token, and every check is a store lookup. Each login mints a
//! fresh token; sessions are never renewed.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use folio_store::{ContentStore, read_record, write_record};

use crate::error::AuthError;
use crate::token::generate_token;

/// Session lifetime: 24 hours
pub const SESSION_TTL_SECONDS: u64 = 86_400;

const SESSION_KEY_PREFIX: &str = "sessions:";

/// A stored session record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds; always `created_at` + 24h
    pub expires_at: i64,
}

/// Issues, validates, and revokes session tokens on top of the
/// content store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn ContentStore>,
    ttl_seconds: u64,
}

impl SessionStore {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            ttl_seconds: SESSION_TTL_SECONDS,
        }
    }

    fn key(token: &str) -> String {
        format!("{}{}", SESSION_KEY_PREFIX, token)
    }

    /// Create a session for a user and return its token.
    pub async fn create(&self, user_id: &str) -> Result<String, AuthError> {
        let token = generate_token()?;
        let created_at = Utc::now().timestamp_millis();
        let session = Session {
            token: token.clone(),
            user_id: user_id.to_string(),
            created_at,
            expires_at: created_at + (self.ttl_seconds as i64) * 1000,
        };

        write_record(
            self.store.as_ref(),
            &Self::key(&token),
            &session,
            Some(self.ttl_seconds),
        )
        .await?;

        debug!("Created session for user {}", user_id);
        Ok(token)
    }

    /// Check whether a token refers to a live session.
    ///
    /// The store's own TTL should have purged an expired record already;
    /// the `expires_at` re-check hedges against TTL sweep latency and
    /// clock skew between this process and the backend. Best-effort, not
    /// an authoritative consistency guarantee.
    pub async fn verify(&self, token: &str) -> Result<bool, AuthError> {
        if token.is_empty() {
            return Ok(false);
        }

        let key = Self::key(token);
        let Some(session) = read_record::<Session>(self.store.as_ref(), &key).await? else {
            return Ok(false);
        };

        if Utc::now().timestamp_millis() > session.expires_at {
            debug!("Session outlived its expiry; deleting lazily");
            self.store.del(&key).await?;
            return Ok(false);
        }

        Ok(true)
    }

    /// Revoke a session. No-op for an empty token.
    pub async fn clear(&self, token: &str) -> Result<(), AuthError> {
        if token.is_empty() {
            return Ok(());
        }
        self.store.del(&Self::key(token)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_store::MemoryStore;

    fn session_store() -> (Arc<MemoryStore>, SessionStore) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), SessionStore::new(store))
    }

    #[tokio::test]
    async fn test_create_then_verify() {
        let (_, sessions) = session_store();
        let token = sessions.create("admin").await.unwrap();
        assert_eq!(token.len(), 64);
        assert!(sessions.verify(&token).await.unwrap());
    }

    #[tokio::test]
    async fn test_clear_then_verify_fails() {
        let (_, sessions) = session_store();
        let token = sessions.create("admin").await.unwrap();
        sessions.clear(&token).await.unwrap();
        assert!(!sessions.verify(&token).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_token_is_invalid_without_lookup() {
        let (_, sessions) = session_store();
        assert!(!sessions.verify("").await.unwrap());
        sessions.clear("").await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_token_is_invalid() {
        let (_, sessions) = session_store();
        assert!(!sessions.verify(&"0".repeat(64)).await.unwrap());
    }

    #[tokio::test]
    async fn test_session_record_invariant() {
        let (store, sessions) = session_store();
        let token = sessions.create("admin").await.unwrap();
        let session: Session =
            read_record(store.as_ref(), &SessionStore::key(&token)).await.unwrap().unwrap();
        assert_eq!(session.token, token);
        assert_eq!(session.user_id, "admin");
        assert_eq!(session.expires_at, session.created_at + 86_400_000);
    }

    #[tokio::test]
    async fn test_stale_record_rejected_and_purged() {
        // Simulates a backend whose TTL sweep lags: the record is still
        // readable but expires_at is in the past.
        let (store, sessions) = session_store();
        let token = sessions.create("admin").await.unwrap();
        let key = SessionStore::key(&token);

        let mut session: Session = read_record(store.as_ref(), &key).await.unwrap().unwrap();
        session.expires_at = Utc::now().timestamp_millis() - 1000;
        write_record(store.as_ref(), &key, &session, None).await.unwrap();

        assert!(!sessions.verify(&token).await.unwrap());
        // The lazy delete must have removed the stale record.
        assert!(store.get(&key).await.unwrap().is_none());
    }
}
