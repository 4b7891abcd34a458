//! # Database Migrations
//!
//! Embedded SQL migrations for the SQLite key-value backend.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending database migrations.
///
/// Idempotent; each migration runs in its own transaction.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{KeyValueStore, SqliteConfig, SqliteStore};

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let store = SqliteStore::connect(SqliteConfig::in_memory()).await.unwrap();

        // Running again is a no-op and keeps the table usable.
        store.run_migrations().await.unwrap();
        store.set("categorias", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("categorias").await.unwrap().as_deref(), Some("[]"));
    }
}
