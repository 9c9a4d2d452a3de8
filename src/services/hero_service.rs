//! Hero service coordinating the record store, the list cache and the
//! villains service.
//!
//! The cache is look-aside: `list_heroes` fills it on a miss, `create_hero`
//! re-snapshots it when present, and updates and deletes leave it alone. A
//! populated entry is served until it is evicted or expires, so lists can be
//! stale after a mutation.

use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Hero, Villain};
use crate::domain::ports::{HeroRepository, StateStore, VillainClient};

/// State store key holding the full hero list.
pub const HEROES_CACHE_KEY: &str = "heroes";

/// Hero use cases over a repository, a list cache and a villain client.
pub struct HeroService<R: HeroRepository> {
    repository: Arc<R>,
    cache: Arc<dyn StateStore>,
    villains: Arc<dyn VillainClient>,
}

impl<R: HeroRepository> HeroService<R> {
    /// Create a new hero service.
    pub fn new(repository: Arc<R>, cache: Arc<dyn StateStore>, villains: Arc<dyn VillainClient>) -> Self {
        Self {
            repository,
            cache,
            villains,
        }
    }

    /// List all heroes, served from the cache when it holds a snapshot.
    #[instrument(skip(self))]
    pub async fn list_heroes(&self) -> DomainResult<Vec<Hero>> {
        info!("Getting heroes");

        if let Some(heroes) = self.cached_heroes().await? {
            return Ok(heroes);
        }

        info!("No heroes in cache, updating");
        self.refresh_cache().await
    }

    /// Get a hero straight from the record store.
    pub async fn get_hero(&self, id: i64) -> DomainResult<Hero> {
        self.repository
            .get(id)
            .await?
            .ok_or(DomainError::HeroNotFound(id))
    }

    /// Replace a hero.
    ///
    /// A write that lands on no row is reported by the repository as a
    /// concurrency conflict; it becomes `HeroNotFound` only if the hero is
    /// really gone.
    #[instrument(skip(self, hero), fields(hero_id = hero.id))]
    pub async fn update_hero(&self, id: i64, hero: &Hero) -> DomainResult<()> {
        if id != hero.id {
            return Err(DomainError::HeroIdMismatch {
                path_id: id,
                body_id: hero.id,
            });
        }

        match self.repository.update(hero).await {
            Err(DomainError::ConcurrencyConflict { entity, id: conflict_id }) => {
                if self.repository.exists(id).await? {
                    warn!(hero_id = id, "Unresolved concurrency conflict on hero update");
                    Err(DomainError::ConcurrencyConflict {
                        entity,
                        id: conflict_id,
                    })
                } else {
                    Err(DomainError::HeroNotFound(id))
                }
            }
            other => other,
        }
    }

    /// Insert a hero and re-snapshot the cached list when one is present.
    ///
    /// The insert is committed before the cache is touched, so a cache
    /// failure here is logged and the created hero is still returned.
    #[instrument(skip(self, hero), fields(hero_id = hero.id))]
    pub async fn create_hero(&self, hero: &Hero) -> DomainResult<Hero> {
        let created = self.repository.create(hero).await?;

        match self.cached_heroes().await {
            Ok(Some(_)) => {
                if let Err(e) = self.refresh_cache().await {
                    warn!(error = %e, "Failed to refresh hero cache after create");
                }
            }
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to read hero cache after create"),
        }

        info!(hero_id = created.id, "Hero created");
        Ok(created)
    }

    /// Delete a hero from the record store.
    #[instrument(skip(self))]
    pub async fn delete_hero(&self, id: i64) -> DomainResult<()> {
        if self.repository.get(id).await?.is_none() {
            return Err(DomainError::HeroNotFound(id));
        }

        self.repository.delete(id).await
    }

    /// Ask the villains service for this hero's villain.
    pub async fn find_villain(&self, hero_name: &str) -> DomainResult<Villain> {
        info!("Finding the villain for {}", hero_name);
        self.villains.find_villain(hero_name).await
    }

    /// Decode the cached list; an undecodable entry counts as a miss.
    async fn cached_heroes(&self) -> DomainResult<Option<Vec<Hero>>> {
        let Some(value) = self.cache.get(HEROES_CACHE_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_value::<Vec<Hero>>(value) {
            Ok(heroes) => Ok(Some(heroes)),
            Err(e) => {
                warn!(error = %e, "Cached hero list is malformed, ignoring it");
                Ok(None)
            }
        }
    }

    async fn refresh_cache(&self) -> DomainResult<Vec<Hero>> {
        let heroes = self.repository.list().await?;
        let snapshot: Value = serde_json::to_value(&heroes)?;
        self.cache.set(HEROES_CACHE_KEY, snapshot).await?;
        Ok(heroes)
    }
}
