use async_trait::async_trait;
use stardex_core::Item;

use crate::error::StorageError;

/// Read access to the item catalog.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Total number of items in the catalog.
    async fn count_items(&self) -> Result<u64, StorageError>;

    /// Up to `limit` items starting at `offset`, ordered by item name.
    async fn list_items(&self, offset: u64, limit: u64) -> Result<Vec<Item>, StorageError>;
}
