//! Tour of Heroes - hero CRUD API with a look-aside list cache
//!
//! Heroes live in SQLite. The full hero list is cached under a single
//! state store key and refilled from the database on a miss. Villains are
//! looked up on a separately deployed service through Dapr service
//! invocation.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors, and port traits
//! - **Service Layer** (`services`): hero read/write coordination
//! - **Adapters** (`adapters`): SQLite, state stores, villains client, HTTP
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging, wiring

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{Config, Hero, Villain};
pub use domain::ports::{HeroRepository, StateStore, VillainClient};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::HeroService;
