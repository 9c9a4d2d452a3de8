//! HTTP surface for the heroes API.

pub mod heroes_http;

pub use heroes_http::{HeroesHttpConfig, HeroesHttpServer};
