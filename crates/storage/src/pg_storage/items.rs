//! ItemStore implementation for PgItemStore.

use async_trait::async_trait;
use stardex_core::Item;

use super::{PgItemStore, row_to_item, u64_to_i64};
use crate::error::StorageError;
use crate::traits::ItemStore;

#[async_trait]
impl ItemStore for PgItemStore {
    async fn count_items(&self) -> Result<u64, StorageError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM items").fetch_one(&self.pool).await?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn list_items(&self, offset: u64, limit: u64) -> Result<Vec<Item>, StorageError> {
        let rows = sqlx::query(
            "SELECT item_name, short_description, description, inventory_icon, item_type, rarity
               FROM items ORDER BY item_name LIMIT $1 OFFSET $2",
        )
        .bind(u64_to_i64(limit))
        .bind(u64_to_i64(offset))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_item).collect()
    }
}

impl PgItemStore {
    /// Insert an item. Returns `false` when an item with the same name exists.
    pub async fn insert_item(&self, item: &Item) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "INSERT INTO items (item_name, short_description, description, inventory_icon, item_type, rarity)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (item_name) DO NOTHING",
        )
        .bind(&item.item_name)
        .bind(&item.short_description)
        .bind(&item.description)
        .bind(&item.inventory_icon)
        .bind(&item.item_type)
        .bind(&item.rarity)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
