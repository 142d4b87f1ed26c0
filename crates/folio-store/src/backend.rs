//! Content store trait

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Key-value store trait
///
/// Implementations of this trait persist JSON documents under string keys,
/// optionally with a time-to-live after which the backend removes the key
/// on its own (no in-process sweep).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Read the value stored under a key. A missing key is `Ok(None)`,
    /// never an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value under a key, replacing any prior value. With a TTL the
    /// backend expires the key after that many seconds. Concurrent writers
    /// to the same key race; last write wins.
    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> Result<(), StoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn del(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and deserialize a stored JSON document
pub async fn read_record<T: DeserializeOwned>(
    store: &dyn ContentStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and store a JSON document under a key
pub async fn write_record<T: Serialize>(
    store: &dyn ContentStore,
    key: &str,
    value: &T,
    ttl_seconds: Option<u64>,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw, ttl_seconds).await
}
