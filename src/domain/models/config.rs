use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the heroes service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Hero list cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Villains service invocation configuration
    #[serde(default)]
    pub villains: VillainsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to allow any origin
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

const fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_cors: default_true(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".heroes/heroes.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// `sqlx` connection URL for the configured path.
    pub fn url(&self) -> String {
        if self.path.starts_with("sqlite:") {
            self.path.clone()
        } else {
            format!("sqlite:{}", self.path)
        }
    }
}

/// Which state store backs the hero list cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-process moka cache
    Memory,
    /// Dapr sidecar state store
    Dapr,
    /// No caching; every list goes to the database
    None,
}

/// Hero list cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Backend: memory, dapr, none
    #[serde(default = "default_cache_backend")]
    pub backend: CacheBackend,

    /// Entry time-to-live for the memory backend (unset keeps entries forever)
    #[serde(default)]
    pub ttl_secs: Option<u64>,

    /// Maximum entries held by the memory backend
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,

    /// Dapr sidecar HTTP endpoint
    #[serde(default = "default_state_dapr_endpoint")]
    pub dapr_endpoint: String,

    /// Dapr state store component name
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Request timeout for the Dapr backend (unset uses the client default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

const fn default_cache_backend() -> CacheBackend {
    CacheBackend::Memory
}

const fn default_cache_capacity() -> u64 {
    100
}

fn default_state_dapr_endpoint() -> String {
    "http://localhost:3500".to_string()
}

fn default_store_name() -> String {
    "statestore".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_cache_backend(),
            ttl_secs: None,
            max_capacity: default_cache_capacity(),
            dapr_endpoint: default_state_dapr_endpoint(),
            store_name: default_store_name(),
            timeout_secs: None,
        }
    }
}

/// Villains service invocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VillainsConfig {
    /// Dapr sidecar HTTP endpoint used for service invocation
    #[serde(default = "default_villains_dapr_endpoint")]
    pub dapr_endpoint: String,

    /// Logical app id of the villains service
    #[serde(default = "default_villains_app_id")]
    pub app_id: String,

    /// Request timeout (unset uses the client default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_villains_dapr_endpoint() -> String {
    "http://localhost:3501".to_string()
}

fn default_villains_app_id() -> String {
    "tour-of-villains-api".to_string()
}

impl Default for VillainsConfig {
    fn default() -> Self {
        Self {
            dapr_endpoint: default_villains_dapr_endpoint(),
            app_id: default_villains_app_id(),
            timeout_secs: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stdout only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation for file logs: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
