use std::sync::Arc;

use anyhow::Result;
use stardex_http::{AppState, create_router};
use stardex_service::{AnalyticsService, CatalogService, SearchService};

use crate::backends;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    if backends::demo_mode() {
        tracing::info!("STARDEX_DEMO set, using in-memory sample data");
    }
    let items = backends::item_store().await?;
    let index = backends::search_index()?;
    let counters = backends::counter_store().await?;

    let analytics_service = Arc::new(AnalyticsService::new(counters, Arc::clone(&index)));
    let state = Arc::new(AppState {
        catalog_service: Arc::new(CatalogService::new(items)),
        search_service: Arc::new(SearchService::new(index, Arc::clone(&analytics_service))),
        analytics_service,
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
