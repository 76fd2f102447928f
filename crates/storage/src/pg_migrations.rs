//! PostgreSQL schema migrations for the item catalog.

use sqlx::PgPool;

use crate::error::StorageError;

/// Run all PostgreSQL migrations. Safe to run repeatedly.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            item_name TEXT PRIMARY KEY,
            short_description TEXT,
            description TEXT,
            inventory_icon TEXT,
            item_type TEXT,
            rarity TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| StorageError::Migration(format!("create items table: {e}")))?;

    Ok(())
}
