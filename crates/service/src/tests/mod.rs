//! Test fixtures and module declarations for service tests.

use std::sync::Arc;

use async_trait::async_trait;
use stardex_core::{Item, SearchResult, TermScore};
use stardex_storage::traits::{CounterStore, ItemStore, SearchIndex};
use stardex_storage::{MemoryCounterStore, MemoryItemStore, MemorySearchIndex, StorageError};

use crate::{AnalyticsService, CatalogService, SearchService};


/// Catalog of `count` items named `item-00000`, `item-00001`, ...
pub fn numbered_items(count: usize) -> Arc<MemoryItemStore> {
    Arc::new(MemoryItemStore::new((0..count).map(|i| Item::new(format!("item-{i:05}")))))
}

pub fn sample_index() -> Arc<MemorySearchIndex> {
    Arc::new(MemorySearchIndex::new([
        SearchResult::from(
            Item::new("fireSword").short_description("Fire Sword").item_type("sword").rarity("Rare"),
        ),
        SearchResult::from(Item::new("iceSword").short_description("Ice Sword").item_type("sword")),
        SearchResult::from(Item::new("woodenBow").short_description("Wooden Bow")),
    ]))
}

pub struct Fixture {
    pub counters: Arc<MemoryCounterStore>,
    pub analytics: Arc<AnalyticsService>,
    pub search: SearchService,
}

pub fn fixture_with_index(index: Arc<dyn SearchIndex>) -> Fixture {
    let counters = Arc::new(MemoryCounterStore::new());
    let analytics = Arc::new(AnalyticsService::new(counters.clone(), Arc::clone(&index)));
    let search = SearchService::new(index, Arc::clone(&analytics));
    Fixture { counters, analytics, search }
}

pub fn fixture() -> Fixture {
    fixture_with_index(sample_index())
}

fn unavailable() -> StorageError {
    StorageError::SearchStatus { code: 503, body: "backend down".to_owned() }
}

/// Collaborator whose every call fails as if the backend were unreachable.
pub struct Unavailable;

#[async_trait]
impl ItemStore for Unavailable {
    async fn count_items(&self) -> Result<u64, StorageError> {
        Err(unavailable())
    }

    async fn list_items(&self, _offset: u64, _limit: u64) -> Result<Vec<Item>, StorageError> {
        Err(unavailable())
    }
}

#[async_trait]
impl SearchIndex for Unavailable {
    async fn search(&self, _query: &str, _max: usize) -> Result<Vec<SearchResult>, StorageError> {
        Err(unavailable())
    }

    async fn document_count(&self) -> Result<u64, StorageError> {
        Err(unavailable())
    }
}

#[async_trait]
impl CounterStore for Unavailable {
    async fn increment_counter(&self, _key: &str) -> Result<i64, StorageError> {
        Err(unavailable())
    }

    async fn get_counter(&self, _key: &str) -> Result<i64, StorageError> {
        Err(unavailable())
    }

    async fn increment_score(&self, _set: &str, _m: &str, _d: f64) -> Result<f64, StorageError> {
        Err(unavailable())
    }

    async fn top_n(&self, _set: &str, _n: usize) -> Result<Vec<TermScore>, StorageError> {
        Err(unavailable())
    }
}

pub fn catalog(items: Arc<dyn ItemStore>) -> CatalogService {
    CatalogService::new(items)
}
