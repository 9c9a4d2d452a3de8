//! Villains service clients.

pub mod dapr_villain_client;

pub use dapr_villain_client::{DaprVillainClient, DaprVillainClientConfig};
