use std::sync::Arc;

use stardex_core::{SEARCH_RESULT_LIMIT, SearchResult, sanitize_query};
use stardex_storage::traits::SearchIndex;

use crate::{AnalyticsService, ServiceError};

/// Free-text item search with analytics.
pub struct SearchService {
    index: Arc<dyn SearchIndex>,
    analytics: Arc<AnalyticsService>,
}

/// Wildcard query string sent to the index for a sanitized term.
#[must_use]
pub fn wildcard_query(sanitized: &str) -> String {
    format!("*{sanitized}*")
}

impl SearchService {
    #[must_use]
    pub fn new(index: Arc<dyn SearchIndex>, analytics: Arc<AnalyticsService>) -> Self {
        Self { index, analytics }
    }

    /// Sanitize `raw_query`, search the index and record the search.
    ///
    /// Analytics are written only after the index answered, so a failed
    /// search is not counted.
    pub async fn search(&self, raw_query: &str) -> Result<Vec<SearchResult>, ServiceError> {
        let clean = sanitize_query(raw_query);
        let results = self.index.search(&wildcard_query(&clean), SEARCH_RESULT_LIMIT).await?;
        self.analytics.record(&clean).await?;
        tracing::info!(query = %clean, hits = results.len(), "item search");
        Ok(results)
    }
}
