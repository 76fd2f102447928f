//! PostgreSQL item store using sqlx.

mod items;

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use stardex_core::{
    Item, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    /// Connect, run migrations and return a ready store.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await?;
        tracing::info!("PgItemStore initialized");
        Ok(Self { pool })
    }
}

/// Convert `u64` to `i64` for SQL LIMIT/OFFSET binds, saturating at `i64::MAX`.
pub(crate) fn u64_to_i64(val: u64) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn row_to_item(row: &sqlx::postgres::PgRow) -> Result<Item, StorageError> {
    Ok(Item {
        item_name: row.try_get("item_name")?,
        short_description: row.try_get("short_description")?,
        description: row.try_get("description")?,
        inventory_icon: row.try_get("inventory_icon")?,
        item_type: row.try_get("item_type")?,
        rarity: row.try_get("rarity")?,
    })
}
