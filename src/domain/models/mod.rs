//! Domain models.

pub mod config;
pub mod hero;
pub mod villain;

pub use config::{
    CacheBackend, CacheConfig, Config, DatabaseConfig, LoggingConfig, ServerConfig, VillainsConfig,
};
pub use hero::Hero;
pub use villain::Villain;
