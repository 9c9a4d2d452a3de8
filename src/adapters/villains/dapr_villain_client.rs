//! Villain lookup through Dapr service invocation.
//!
//! The villains service is addressed by app id, never by network address:
//! `GET {endpoint}/v1.0/invoke/{app_id}/method/villain?heroName=...`.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Villain;
use crate::domain::ports::VillainClient;

/// Method invoked on the villains service.
const VILLAIN_METHOD: &str = "villain";

/// Configuration for the villains service client
#[derive(Debug, Clone)]
pub struct DaprVillainClientConfig {
    /// Dapr sidecar HTTP endpoint
    pub endpoint: String,

    /// Logical app id of the villains service
    pub app_id: String,

    /// Request timeout (client default when unset)
    pub timeout: Option<Duration>,
}

impl Default for DaprVillainClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3501".to_string(),
            app_id: "tour-of-villains-api".to_string(),
            timeout: None,
        }
    }
}

/// Villain client invoking the villains service through a Dapr sidecar.
pub struct DaprVillainClient {
    http_client: ReqwestClient,
    endpoint: String,
    app_id: String,
}

impl DaprVillainClient {
    /// Create a client for the configured sidecar and app id.
    pub fn new(config: DaprVillainClientConfig) -> DomainResult<Self> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| DomainError::RemoteInvocationFailed {
            app_id: config.app_id.clone(),
            reason: format!("failed to build HTTP client: {e}"),
        })?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            app_id: config.app_id,
        })
    }

    fn method_url(&self) -> String {
        format!("{}/v1.0/invoke/{}/method/{}", self.endpoint, self.app_id, VILLAIN_METHOD)
    }

    fn invocation_error(&self, reason: impl Into<String>) -> DomainError {
        DomainError::RemoteInvocationFailed {
            app_id: self.app_id.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl VillainClient for DaprVillainClient {
    #[instrument(skip(self))]
    async fn find_villain(&self, hero_name: &str) -> DomainResult<Villain> {
        let response = self
            .http_client
            .get(self.method_url())
            .query(&[("heroName", hero_name)])
            .send()
            .await
            .map_err(|e| self.invocation_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.invocation_error(format!("status {status}: {body}")));
        }

        let villain: Villain = response
            .json()
            .await
            .map_err(|e| self.invocation_error(format!("invalid villain payload: {e}")))?;

        debug!(app_id = %self.app_id, villain = %villain.name, "Villain found");
        Ok(villain)
    }
}
