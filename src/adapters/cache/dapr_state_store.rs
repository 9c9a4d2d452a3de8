//! Dapr sidecar state store client.
//!
//! Talks to the sidecar's state API:
//! - `GET  {endpoint}/v1.0/state/{store}/{key}` (204 when the key is absent)
//! - `POST {endpoint}/v1.0/state/{store}` with `[{"key", "value"}]`

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::StateStore;

/// Configuration for the Dapr state store client
#[derive(Debug, Clone)]
pub struct DaprStateStoreConfig {
    /// Sidecar HTTP endpoint
    pub endpoint: String,

    /// State store component name
    pub store_name: String,

    /// Request timeout (client default when unset)
    pub timeout: Option<Duration>,
}

impl Default for DaprStateStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3500".to_string(),
            store_name: "statestore".to_string(),
            timeout: None,
        }
    }
}

#[derive(Serialize)]
struct StateItem<'a> {
    key: &'a str,
    value: Value,
}

/// State store backed by a Dapr sidecar.
pub struct DaprStateStore {
    http_client: ReqwestClient,
    endpoint: String,
    store_name: String,
}

impl DaprStateStore {
    /// Create a client for the configured sidecar and store.
    pub fn new(config: DaprStateStoreConfig) -> DomainResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| DomainError::StateStoreError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            store_name: config.store_name,
        })
    }

    fn state_url(&self) -> String {
        format!("{}/v1.0/state/{}", self.endpoint, self.store_name)
    }
}

#[async_trait]
impl StateStore for DaprStateStore {
    async fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        let url = format!("{}/{}", self.state_url(), key);
        debug!(url = %url, "Fetching state");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::StateStoreError(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::StateStoreError(format!(
                "GET state {key} returned {status}: {body}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::StateStoreError(e.to_string()))?;
        if body.is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn set(&self, key: &str, value: Value) -> DomainResult<()> {
        let response = self
            .http_client
            .post(self.state_url())
            .json(&[StateItem { key, value }])
            .send()
            .await
            .map_err(|e| DomainError::StateStoreError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::StateStoreError(format!(
                "save state {key} returned {status}: {body}"
            )));
        }

        Ok(())
    }
}
