//! Infrastructure layer module
//!
//! Configuration loading, logging, and the wiring that turns a `Config`
//! into running adapters.

pub mod config;
pub mod logging;
pub mod setup;
