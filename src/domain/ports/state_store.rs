//! Key-value state store port used as the look-aside cache.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::DomainResult;

/// Key-value store holding JSON documents.
///
/// Values are untyped so that a single store can be shared by callers with
/// different payload shapes; decoding is the caller's concern.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Fetch the value at `key`, `None` when absent.
    async fn get(&self, key: &str) -> DomainResult<Option<Value>>;

    /// Store `value` at `key`, overwriting any prior value.
    async fn set(&self, key: &str, value: Value) -> DomainResult<()>;
}
