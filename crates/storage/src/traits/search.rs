use async_trait::async_trait;
use stardex_core::SearchResult;

use crate::error::StorageError;

/// Full-text search over item documents.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Run a query-string search, returning at most `max_results` hits.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, StorageError>;

    /// Number of documents held by the index.
    async fn document_count(&self) -> Result<u64, StorageError>;
}
