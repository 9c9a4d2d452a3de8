//! Idempotent schema bootstrap for the heroes table.

use sqlx::SqlitePool;

const HEROES_SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS heroes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
";

/// Create the heroes table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(HEROES_SCHEMA).execute(pool).await?;
    Ok(())
}
