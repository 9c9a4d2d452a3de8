//! State store adapters backing the hero list cache.
//!
//! - `MemoryStateStore`: in-process `moka` cache with optional TTL
//! - `DaprStateStore`: Dapr sidecar state API over HTTP
//! - `NullStateStore`: caching disabled, every read misses

pub mod dapr_state_store;
pub mod memory_state_store;
pub mod null_state_store;

pub use dapr_state_store::{DaprStateStore, DaprStateStoreConfig};
pub use memory_state_store::MemoryStateStore;
pub use null_state_store::NullStateStore;
