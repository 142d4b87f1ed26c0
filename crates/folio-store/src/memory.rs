//! In-memory store backend

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::backend::ContentStore;
use crate::error::StoreError;

struct Entry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

/// In-memory store used by tests and local development.
///
/// Expiry is lazy: an expired entry is removed the next time its key is
/// read, which matches the "backend owns expiry" contract closely enough
/// for a single process.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite an entry's expiry, keeping its value. Test hook for
    /// simulating a backend whose TTL sweep has not yet run.
    pub fn force_expiry(&self, key: &str, expires_at: DateTime<Utc>) {
        let mut entries = self.entries.write();
        if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Some(expires_at);
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) => {
                    let expired = entry.expires_at.is_some_and(|at| Utc::now() > at);
                    if !expired {
                        return Ok(Some(entry.value.clone()));
                    }
                }
            }
        }
        // Entry exists but has expired; drop it under the write lock.
        self.entries.write().remove(key);
        Ok(None)
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> Result<(), StoreError> {
        let expires_at = ttl_seconds.map(|secs| Utc::now() + Duration::seconds(secs as i64));
        self.entries.write().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_after_write() {
        let store = MemoryStore::new();
        store.set("greeting", "\"hello\"", None).await.unwrap();
        assert_eq!(
            store.get("greeting").await.unwrap(),
            Some("\"hello\"".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.set("k", "1", None).await.unwrap();
        store.del("k").await.unwrap();
        store.del("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_removed_on_read() {
        let store = MemoryStore::new();
        store.set("k", "1", Some(3600)).await.unwrap();
        store.force_expiry("k", Utc::now() - Duration::seconds(1));
        assert_eq!(store.get("k").await.unwrap(), None);
        // The lazy delete must have purged the entry itself.
        assert!(store.entries.read().get("k").is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryStore::new();
        store.set("k", "1", None).await.unwrap();
        store.set("k", "2", None).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("2".to_string()));
    }
}
