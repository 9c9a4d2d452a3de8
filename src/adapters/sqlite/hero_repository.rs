//! SQLite implementation of the HeroRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::Hero;
use crate::domain::ports::HeroRepository;

/// SQLite implementation of `HeroRepository`.
#[derive(Clone)]
pub struct SqliteHeroRepository {
    pool: SqlitePool,
}

impl SqliteHeroRepository {
    /// Create a repository over an initialized pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeroRepository for SqliteHeroRepository {
    async fn list(&self) -> DomainResult<Vec<Hero>> {
        let rows: Vec<HeroRow> = sqlx::query_as("SELECT id, name FROM heroes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Hero::from).collect())
    }

    async fn get(&self, id: i64) -> DomainResult<Option<Hero>> {
        let row: Option<HeroRow> = sqlx::query_as("SELECT id, name FROM heroes WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Hero::from))
    }

    async fn create(&self, hero: &Hero) -> DomainResult<Hero> {
        if hero.needs_id() {
            let result = sqlx::query("INSERT INTO heroes (name) VALUES (?)")
                .bind(&hero.name)
                .execute(&self.pool)
                .await?;
            return Ok(Hero::new(result.last_insert_rowid(), hero.name.clone()));
        }

        let result = sqlx::query("INSERT INTO heroes (id, name) VALUES (?, ?) ON CONFLICT(id) DO NOTHING")
            .bind(hero.id)
            .bind(&hero.name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HeroAlreadyExists(hero.id));
        }

        Ok(hero.clone())
    }

    async fn update(&self, hero: &Hero) -> DomainResult<()> {
        let result = sqlx::query("UPDATE heroes SET name = ? WHERE id = ?")
            .bind(&hero.name)
            .bind(hero.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ConcurrencyConflict {
                entity: "hero".to_string(),
                id: hero.id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM heroes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::HeroNotFound(id));
        }

        Ok(())
    }

    async fn exists(&self, id: i64) -> DomainResult<bool> {
        let (found,): (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM heroes WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(found)
    }
}

#[derive(sqlx::FromRow)]
struct HeroRow {
    id: i64,
    name: String,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}
