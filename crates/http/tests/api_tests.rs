#![allow(clippy::unwrap_used, reason = "integration test code")]

use std::sync::Arc;

use async_trait::async_trait;
use stardex_core::{Item, SearchResult};
use stardex_http::{AppState, create_router};
use stardex_service::{AnalyticsService, CatalogService, SearchService};
use stardex_storage::traits::{CounterStore, ItemStore, SearchIndex};
use stardex_storage::{MemoryCounterStore, MemoryItemStore, MemorySearchIndex, StorageError};

struct DownIndex;

#[async_trait]
impl SearchIndex for DownIndex {
    async fn search(&self, _query: &str, _max: usize) -> Result<Vec<SearchResult>, StorageError> {
        Err(StorageError::SearchStatus { code: 503, body: "down".to_owned() })
    }

    async fn document_count(&self) -> Result<u64, StorageError> {
        Err(StorageError::SearchStatus { code: 503, body: "down".to_owned() })
    }
}

fn build_state(
    items: Arc<dyn ItemStore>,
    index: Arc<dyn SearchIndex>,
    counters: Arc<dyn CounterStore>,
) -> Arc<AppState> {
    let analytics_service = Arc::new(AnalyticsService::new(counters, Arc::clone(&index)));
    Arc::new(AppState {
        catalog_service: Arc::new(CatalogService::new(items)),
        search_service: Arc::new(SearchService::new(index, Arc::clone(&analytics_service))),
        analytics_service,
    })
}

fn memory_state() -> Arc<AppState> {
    let items = MemoryItemStore::new((0..450).map(|i| {
        Item::new(format!("item-{i:03}")).short_description(format!("Item {i}")).rarity("Common")
    }));
    let index = MemorySearchIndex::new([
        SearchResult::from(Item::new("fireSword").short_description("Fire Sword").rarity("Rare")),
        SearchResult::from(Item::new("iceSword").short_description("Ice Sword")),
        SearchResult::from(Item::new("woodenBow").short_description("Wooden Bow")),
    ]);
    build_state(Arc::new(items), Arc::new(index), Arc::new(MemoryCounterStore::new()))
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server(state: Arc<AppState>) -> String {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn health_and_version() {
    let base = spawn_test_server(memory_state()).await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");

    let version: serde_json::Value =
        reqwest::get(format!("{base}/api/version")).await.unwrap().json().await.unwrap();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn index_page_is_html() {
    let base = spawn_test_server(memory_state()).await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_owned();
    assert!(content_type.contains("text/html"));
    assert!(resp.text().await.unwrap().contains("/api/search/"));
}

#[tokio::test]
async fn items_page_two_json() {
    let base = spawn_test_server(memory_state()).await;
    let page: serde_json::Value =
        reqwest::get(format!("{base}/api/items/2")).await.unwrap().json().await.unwrap();
    assert_eq!(page["current_page"], 2);
    assert_eq!(page["prev_page"], 1);
    assert_eq!(page["next_page"], 3);
    assert_eq!(page["last_page"], 2);
    assert_eq!(page["page_size"], 200);
    assert_eq!(page["total_items"], 450);
    let items = page["items"].as_array().unwrap();
    assert_eq!(items.len(), 50);
    assert_eq!(items[0]["itemName"], "item-400");
}

#[tokio::test]
async fn first_page_json_and_html() {
    let base = spawn_test_server(memory_state()).await;
    let page: serde_json::Value =
        reqwest::get(format!("{base}/api/items")).await.unwrap().json().await.unwrap();
    assert_eq!(page["current_page"], 1);
    assert_eq!(page["items"].as_array().unwrap().len(), 200);

    let html = reqwest::get(format!("{base}/all")).await.unwrap().text().await.unwrap();
    assert!(html.contains("item-000"));
    assert!(html.contains("Page 1 of 2"));

    let html = reqwest::get(format!("{base}/all/2")).await.unwrap().text().await.unwrap();
    assert!(html.contains("item-449"));
}

#[tokio::test]
async fn invalid_page_is_bad_request() {
    let base = spawn_test_server(memory_state()).await;
    for path in ["/all/abc", "/all/0", "/all/-3", "/api/items/1.5"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), 400, "{path}");
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("invalid page"), "{path}");
    }
}

#[tokio::test]
async fn search_returns_projected_hits_and_updates_stats() {
    let base = spawn_test_server(memory_state()).await;

    let resp = reqwest::get(format!("{base}/api/search/Sword%21%21")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let hits: serde_json::Value = resp.json().await.unwrap();
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["itemName"], "fireSword");
    assert_eq!(hits[0]["shortdescription"], "Fire Sword");
    assert_eq!(hits[0]["rarity"], "Rare");
    assert!(hits[1]["rarity"].is_null());

    reqwest::get(format!("{base}/api/search/Sword")).await.unwrap();
    reqwest::get(format!("{base}/api/search/ab")).await.unwrap();

    let stats: serde_json::Value =
        reqwest::get(format!("{base}/api/stats")).await.unwrap().json().await.unwrap();
    assert_eq!(stats["total_searches"], "3");
    assert_eq!(stats["indexed_items"], "3");
    let top = stats["top_terms"].as_array().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0]["term"], "Sword");
    assert_eq!(top[0]["score"], "2");

    let html = reqwest::get(format!("{base}/stats")).await.unwrap().text().await.unwrap();
    assert!(html.contains("Total searches: 3"));
}

#[tokio::test]
async fn unavailable_index_is_service_unavailable() {
    let counters = Arc::new(MemoryCounterStore::new());
    let state = build_state(
        Arc::new(MemoryItemStore::default()),
        Arc::new(DownIndex),
        Arc::clone(&counters) as Arc<dyn CounterStore>,
    );
    let base = spawn_test_server(state).await;

    let resp = reqwest::get(format!("{base}/api/search/sword")).await.unwrap();
    assert_eq!(resp.status(), 503);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("database not available"));
    assert_eq!(counters.get_counter("searches").await.unwrap(), 0);

    let resp = reqwest::get(format!("{base}/stats")).await.unwrap();
    assert_eq!(resp.status(), 503);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let base = spawn_test_server(memory_state()).await;
    let resp = reqwest::get(format!("{base}/api/nonexistent")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
