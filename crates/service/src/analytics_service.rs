use std::sync::Arc;

use stardex_core::{
    DisplayTerm, MIN_TERM_LENGTH, SEARCH_COUNTER_KEY, SEARCH_TERMS_KEY, SearchStats,
    TOP_TERMS_LIMIT, format_number,
};
use stardex_storage::traits::{CounterStore, SearchIndex};

use crate::ServiceError;

/// Records search analytics and reads them back for the statistics page.
///
/// All shared state lives in the counter store; this type holds none.
pub struct AnalyticsService {
    counters: Arc<dyn CounterStore>,
    index: Arc<dyn SearchIndex>,
}

impl AnalyticsService {
    #[must_use]
    pub fn new(counters: Arc<dyn CounterStore>, index: Arc<dyn SearchIndex>) -> Self {
        Self { counters, index }
    }

    /// Count one search for an already-sanitized query.
    ///
    /// The global counter always moves; the term itself is only scored when it
    /// is at least [`MIN_TERM_LENGTH`] characters long.
    pub async fn record(&self, sanitized_query: &str) -> Result<(), ServiceError> {
        if sanitized_query.len() >= MIN_TERM_LENGTH {
            self.counters.increment_score(SEARCH_TERMS_KEY, sanitized_query, 1.0).await?;
        }
        self.counters.increment_counter(SEARCH_COUNTER_KEY).await?;
        Ok(())
    }

    /// Top terms, total searches and indexed item count, formatted for display.
    pub async fn stats(&self) -> Result<SearchStats, ServiceError> {
        let total_searches = self.counters.get_counter(SEARCH_COUNTER_KEY).await?;
        let indexed_items = self.index.document_count().await?;
        let top = self.counters.top_n(SEARCH_TERMS_KEY, TOP_TERMS_LIMIT).await?;
        Ok(SearchStats {
            total_searches: format_number(u64::try_from(total_searches).unwrap_or(0)),
            indexed_items: format_number(indexed_items),
            top_terms: top.iter().map(DisplayTerm::from).collect(),
        })
    }
}
