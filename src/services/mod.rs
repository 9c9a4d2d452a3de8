//! Service layer coordinating repositories, caches and remote clients.

pub mod hero_service;

pub use hero_service::{HeroService, HEROES_CACHE_KEY};
