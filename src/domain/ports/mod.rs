//! Port trait definitions.
//!
//! Async interfaces the hero service depends on:
//! - HeroRepository: durable hero records
//! - StateStore: key-value cache holding the hero list snapshot
//! - VillainClient: invocation of the remote villains service

pub mod hero_repository;
pub mod state_store;
pub mod villain_client;

pub use hero_repository::HeroRepository;
pub use state_store::StateStore;
pub use villain_client::VillainClient;
