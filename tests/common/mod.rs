//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};

use tour_of_heroes::adapters::cache::MemoryStateStore;
use tour_of_heroes::adapters::sqlite::{create_migrated_test_pool, SqliteHeroRepository};
use tour_of_heroes::{DomainResult, HeroService, Villain, VillainClient};

/// Villain client returning a fixed payload and recording requested names.
#[derive(Default)]
pub struct RecordingVillainClient {
    pub requested: Mutex<Vec<String>>,
}

#[async_trait]
impl VillainClient for RecordingVillainClient {
    async fn find_villain(&self, hero_name: &str) -> DomainResult<Villain> {
        self.requested
            .lock()
            .expect("villain request log poisoned")
            .push(hero_name.to_string());
        Ok(serde_json::from_value(json!({"name": "Joker", "id": 1})).expect("valid villain"))
    }
}

/// Collaborators behind a hero service, kept so tests can inspect them.
pub struct Fixture {
    pub repo: Arc<SqliteHeroRepository>,
    pub cache: Arc<MemoryStateStore>,
    pub villains: Arc<RecordingVillainClient>,
}

impl Fixture {
    pub async fn new() -> Self {
        let pool = create_migrated_test_pool()
            .await
            .expect("failed to create test database");

        Self {
            repo: Arc::new(SqliteHeroRepository::new(pool)),
            cache: Arc::new(MemoryStateStore::new()),
            villains: Arc::new(RecordingVillainClient::default()),
        }
    }

    pub fn service(&self) -> HeroService<SqliteHeroRepository> {
        HeroService::new(self.repo.clone(), self.cache.clone(), self.villains.clone())
    }
}
