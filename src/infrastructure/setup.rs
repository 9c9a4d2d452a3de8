//! Wiring from a loaded `Config` to running adapters.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::adapters::cache::{DaprStateStore, DaprStateStoreConfig, MemoryStateStore, NullStateStore};
use crate::adapters::http::{HeroesHttpConfig, HeroesHttpServer};
use crate::adapters::sqlite::{initialize_database, PoolConfig, SqliteHeroRepository};
use crate::adapters::villains::{DaprVillainClient, DaprVillainClientConfig};
use crate::domain::models::{CacheBackend, CacheConfig, Config, VillainsConfig};
use crate::domain::ports::{StateStore, VillainClient};
use crate::services::HeroService;

/// Build the hero list cache selected by the configuration.
pub fn build_state_store(config: &CacheConfig) -> Result<Arc<dyn StateStore>> {
    let store: Arc<dyn StateStore> = match config.backend {
        CacheBackend::Memory => Arc::new(MemoryStateStore::with_options(
            config.max_capacity,
            config.ttl_secs.map(Duration::from_secs),
        )),
        CacheBackend::Dapr => Arc::new(
            DaprStateStore::new(DaprStateStoreConfig {
                endpoint: config.dapr_endpoint.clone(),
                store_name: config.store_name.clone(),
                timeout: config.timeout_secs.map(Duration::from_secs),
            })
            .context("Failed to create Dapr state store client")?,
        ),
        CacheBackend::None => Arc::new(NullStateStore::new()),
    };

    info!(backend = ?config.backend, "Hero cache configured");
    Ok(store)
}

/// Build the villains service client.
pub fn build_villain_client(config: &VillainsConfig) -> Result<Arc<dyn VillainClient>> {
    let client = DaprVillainClient::new(DaprVillainClientConfig {
        endpoint: config.dapr_endpoint.clone(),
        app_id: config.app_id.clone(),
        timeout: config.timeout_secs.map(Duration::from_secs),
    })
    .context("Failed to create villains client")?;

    Ok(Arc::new(client))
}

/// Open the database and assemble the HTTP server.
pub async fn build_server(config: &Config) -> Result<HeroesHttpServer<SqliteHeroRepository>> {
    let pool_config = PoolConfig {
        max_connections: config.database.max_connections,
        ..Default::default()
    };
    let pool = initialize_database(&config.database.url(), Some(pool_config))
        .await
        .context("Failed to initialize database")?;
    info!(path = %config.database.path, "Database initialized");

    let service = HeroService::new(
        Arc::new(SqliteHeroRepository::new(pool)),
        build_state_store(&config.cache)?,
        build_villain_client(&config.villains)?,
    );

    Ok(HeroesHttpServer::new(
        service,
        HeroesHttpConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            enable_cors: config.server.enable_cors,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_none_backend_never_caches() {
        let config = CacheConfig {
            backend: CacheBackend::None,
            ..Default::default()
        };
        let store = build_state_store(&config).unwrap();

        store.set("heroes", json!([])).await.unwrap();
        assert!(store.get("heroes").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_backend_caches() {
        let store = build_state_store(&CacheConfig::default()).unwrap();

        store.set("heroes", json!([])).await.unwrap();
        assert_eq!(store.get("heroes").await.unwrap(), Some(json!([])));
    }

    #[tokio::test]
    async fn test_build_server_with_in_memory_database() {
        let mut config = Config::default();
        config.database.path = "sqlite::memory:".to_string();
        config.database.max_connections = 1;

        assert!(build_server(&config).await.is_ok());
    }
}
