//! Redis-compatible REST store backend
//!
//! Speaks the Upstash-style REST protocol used by hosted key-value
//! services: single commands as URL paths (`/get/<key>`, `/set/<key>`,
//! `/del/<key>`) with a bearer token, responses wrapped in a
//! `{"result": ...}` envelope.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::backend::ContentStore;
use crate::error::StoreError;

/// REST store configuration
#[derive(Clone, Debug)]
pub struct RestStoreConfig {
    /// Base URL of the REST endpoint
    pub url: String,
    /// Bearer token for authentication
    pub token: String,
}

/// Response envelope returned by the REST endpoint
#[derive(Debug, Deserialize)]
struct RestEnvelope {
    #[serde(default, deserialize_with = "deserialize_present")]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

/// Keeps an explicit `"result": null` as `Some(Null)`, distinct from a
/// missing `result` field (`None` via the field default).
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// REST store client
pub struct RestStore {
    config: RestStoreConfig,
    client: Client,
}

impl RestStore {
    /// Create a new REST store client
    pub fn new(config: RestStoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder().build()?;

        info!("Created REST store client for {}", config.url);

        Ok(Self { config, client })
    }

    fn command_url(&self, command: &str, key: &str) -> String {
        format!("{}/{}/{}", self.config.url.trim_end_matches('/'), command, key)
    }

    async fn parse_envelope(&self, response: reqwest::Response) -> Result<RestEnvelope, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend(format!(
                "REST store returned {}: {}",
                status, body
            )));
        }

        let envelope: RestEnvelope = response.json().await?;
        if let Some(err) = envelope.error {
            return Err(StoreError::Backend(err));
        }
        Ok(envelope)
    }
}

#[async_trait]
impl ContentStore for RestStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        debug!("GET {}", key);

        let response = self
            .client
            .get(self.command_url("get", key))
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        let envelope = self.parse_envelope(response).await?;
        match envelope.result {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(raw)) => Ok(Some(raw)),
            Some(other) => Err(StoreError::Backend(format!(
                "Unexpected GET result shape: {}",
                other
            ))),
        }
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: Option<u64>,
    ) -> Result<(), StoreError> {
        debug!("SET {} (ttl: {:?})", key, ttl_seconds);

        let mut url = self.command_url("set", key);
        if let Some(ttl) = ttl_seconds {
            url.push_str(&format!("?EX={}", ttl));
        }

        // The value travels as the request body so it never needs
        // path encoding.
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.token)
            .body(value.to_string())
            .send()
            .await?;

        self.parse_envelope(response).await?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<(), StoreError> {
        debug!("DEL {}", key);

        let response = self
            .client
            .get(self.command_url("del", key))
            .bearer_auth(&self.config.token)
            .send()
            .await?;

        self.parse_envelope(response).await?;
        Ok(())
    }
}
