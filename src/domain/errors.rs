//! Domain errors for the Tour of Heroes service.

use thiserror::Error;

/// Domain-level errors that can occur while serving hero requests.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Hero not found: {0}")]
    HeroNotFound(i64),

    #[error("Hero id mismatch: path id {path_id} does not match payload id {body_id}")]
    HeroIdMismatch { path_id: i64, body_id: i64 },

    #[error("Hero already exists: {0}")]
    HeroAlreadyExists(i64),

    #[error("Concurrency conflict: {entity} {id} was modified")]
    ConcurrencyConflict { entity: String, id: String },

    #[error("Remote invocation of {app_id} failed: {reason}")]
    RemoteInvocationFailed { app_id: String, reason: String },

    #[error("State store error: {0}")]
    StateStoreError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
