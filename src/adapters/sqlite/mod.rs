//! SQLite database adapters for the heroes service.

pub mod connection;
pub mod hero_repository;
pub mod schema;

pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError, PoolConfig};
pub use hero_repository::SqliteHeroRepository;
pub use schema::ensure_schema;

use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("Schema error: {0}")]
    Schema(#[from] sqlx::Error),
}

pub async fn initialize_database(database_url: &str, config: Option<PoolConfig>) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(database_url, config).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Create an in-memory test pool with the schema applied.
pub async fn create_migrated_test_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = create_test_pool().await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}
