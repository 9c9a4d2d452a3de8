//! Null state store implementation.
//!
//! Used when the hero list cache is disabled but the service still
//! requires a StateStore implementation.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;
use crate::domain::ports::StateStore;

/// A no-op state store that stores nothing.
#[derive(Debug, Clone, Default)]
pub struct NullStateStore;

impl NullStateStore {
    /// Create a new null state store.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StateStore for NullStateStore {
    async fn get(&self, _key: &str) -> DomainResult<Option<Value>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: Value) -> DomainResult<()> {
        Ok(())
    }
}
