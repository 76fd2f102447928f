use std::sync::Arc;

use anyhow::Result;
use stardex_service::{AnalyticsService, SearchService};
use stardex_storage::traits::SearchIndex;

use crate::backends;

async fn analytics() -> Result<(Arc<dyn SearchIndex>, Arc<AnalyticsService>)> {
    let index = backends::search_index()?;
    let counters = backends::counter_store().await?;
    let analytics = Arc::new(AnalyticsService::new(counters, Arc::clone(&index)));
    Ok((index, analytics))
}

pub(crate) async fn run_search(query: &str) -> Result<()> {
    let (index, analytics) = analytics().await?;
    let service = SearchService::new(index, analytics);
    let results = service.search(query).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

pub(crate) async fn run_stats() -> Result<()> {
    let (_, analytics) = analytics().await?;
    let stats = analytics.stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
