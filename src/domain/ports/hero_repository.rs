//! Hero repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Hero;

/// Repository interface for Hero persistence.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// List every hero, ordered by id.
    async fn list(&self) -> DomainResult<Vec<Hero>>;

    /// Get a hero by id.
    async fn get(&self, id: i64) -> DomainResult<Option<Hero>>;

    /// Insert a hero and return it with its final id.
    ///
    /// Fails with `HeroAlreadyExists` when the id is taken.
    async fn create(&self, hero: &Hero) -> DomainResult<Hero>;

    /// Replace every column of an existing hero.
    ///
    /// Fails with `ConcurrencyConflict` when no row was written.
    async fn update(&self, hero: &Hero) -> DomainResult<()>;

    /// Delete a hero.
    async fn delete(&self, id: i64) -> DomainResult<()>;

    /// Whether a hero with this id exists.
    async fn exists(&self, id: i64) -> DomainResult<bool>;
}
