//! Villain payload returned by the villains service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Villain returned by the remote villains service.
///
/// Only `name` is interpreted; every other field is kept as-is so the
/// payload round-trips to our own callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Villain {
    /// Villain name.
    pub name: String,
    /// Fields not interpreted locally.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Villain {
    /// Create a villain with no extra fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}
