//! In-process state store using a moka cache.
//!
//! Entries live until evicted by capacity or, when configured, until their
//! TTL expires. Nothing invalidates them on hero writes.

use async_trait::async_trait;
use moka::future::Cache;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::DomainResult;
use crate::domain::ports::StateStore;

/// Default maximum number of cached keys.
const DEFAULT_MAX_CAPACITY: u64 = 100;

/// Moka-backed state store.
#[derive(Clone)]
pub struct MemoryStateStore {
    entries: Cache<String, Arc<Value>>,
}

impl MemoryStateStore {
    /// Create a store without TTL and with the default capacity.
    pub fn new() -> Self {
        Self::with_options(DEFAULT_MAX_CAPACITY, None)
    }

    /// Create with custom capacity and optional TTL.
    pub fn with_options(max_capacity: u64, ttl: Option<Duration>) -> Self {
        let mut builder = Cache::builder().max_capacity(max_capacity);
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }

        Self {
            entries: builder.build(),
        }
    }
}

impl Default for MemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, key: &str) -> DomainResult<Option<Value>> {
        Ok(self.entries.get(key).await.map(|v| (*v).clone()))
    }

    async fn set(&self, key: &str, value: Value) -> DomainResult<()> {
        self.entries.insert(key.to_string(), Arc::new(value)).await;
        Ok(())
    }
}
