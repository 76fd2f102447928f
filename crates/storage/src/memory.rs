//! In-process collaborators for tests and demo mode.
//!
//! Each call takes a single mutex, so every increment is atomic per call
//! just like the Redis backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use stardex_core::{Item, SearchResult, TermScore};

use crate::error::StorageError;
use crate::traits::{CounterStore, ItemStore, SearchIndex};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn to_usize(val: u64) -> usize {
    usize::try_from(val).unwrap_or(usize::MAX)
}

/// Item catalog kept sorted by item name.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: Mutex<Vec<Item>>,
}

impl MemoryItemStore {
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let store = Self::default();
        for item in items {
            store.insert(item);
        }
        store
    }

    /// Insert an item. Returns `false` when an item with the same name exists.
    pub fn insert(&self, item: Item) -> bool {
        let mut items = lock(&self.items);
        match items.binary_search_by(|probe| probe.item_name.cmp(&item.item_name)) {
            Ok(_) => false,
            Err(pos) => {
                items.insert(pos, item);
                true
            },
        }
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn count_items(&self) -> Result<u64, StorageError> {
        Ok(lock(&self.items).len() as u64)
    }

    async fn list_items(&self, offset: u64, limit: u64) -> Result<Vec<Item>, StorageError> {
        Ok(lock(&self.items).iter().skip(to_usize(offset)).take(to_usize(limit)).cloned().collect())
    }
}

/// Search index doing case-insensitive substring matching.
///
/// Understands the `*term*` wildcard form the catalog sends: surrounding
/// asterisks are stripped and an empty pattern matches every document.
#[derive(Debug, Default)]
pub struct MemorySearchIndex {
    docs: Mutex<Vec<SearchResult>>,
}

impl MemorySearchIndex {
    #[must_use]
    pub fn new(docs: impl IntoIterator<Item = SearchResult>) -> Self {
        Self { docs: Mutex::new(docs.into_iter().collect()) }
    }

    pub fn add(&self, doc: SearchResult) {
        lock(&self.docs).push(doc);
    }
}

fn field_matches(field: Option<&String>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

#[async_trait]
impl SearchIndex for MemorySearchIndex {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, StorageError> {
        let needle = query.trim_matches('*').to_lowercase();
        Ok(lock(&self.docs)
            .iter()
            .filter(|doc| {
                needle.is_empty()
                    || field_matches(doc.item_name.as_ref(), &needle)
                    || field_matches(doc.short_description.as_ref(), &needle)
                    || field_matches(doc.description.as_ref(), &needle)
            })
            .take(max_results)
            .cloned()
            .collect())
    }

    async fn document_count(&self) -> Result<u64, StorageError> {
        Ok(lock(&self.docs).len() as u64)
    }
}

/// Counters and scored sets. Ties in [`CounterStore::top_n`] keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counters: Mutex<HashMap<String, i64>>,
    // Members in first-insertion order.
    sets: Mutex<HashMap<String, Vec<(String, f64)>>>,
}

impl MemoryCounterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score of `member`, if recorded.
    #[must_use]
    pub fn score(&self, set: &str, member: &str) -> Option<f64> {
        lock(&self.sets)
            .get(set)
            .and_then(|members| members.iter().find(|(m, _)| m == member).map(|(_, s)| *s))
    }

    /// Number of members in `set`.
    #[must_use]
    pub fn set_len(&self, set: &str) -> usize {
        lock(&self.sets).get(set).map_or(0, Vec::len)
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment_counter(&self, key: &str) -> Result<i64, StorageError> {
        let mut counters = lock(&self.counters);
        let value = counters.entry(key.to_owned()).or_insert(0);
        *value = value.saturating_add(1);
        Ok(*value)
    }

    async fn get_counter(&self, key: &str) -> Result<i64, StorageError> {
        Ok(lock(&self.counters).get(key).copied().unwrap_or(0))
    }

    async fn increment_score(
        &self,
        set: &str,
        member: &str,
        delta: f64,
    ) -> Result<f64, StorageError> {
        let mut sets = lock(&self.sets);
        let members = sets.entry(set.to_owned()).or_default();
        if let Some((_, score)) = members.iter_mut().find(|(m, _)| m == member) {
            *score += delta;
            return Ok(*score);
        }
        members.push((member.to_owned(), delta));
        Ok(delta)
    }

    async fn top_n(&self, set: &str, n: usize) -> Result<Vec<TermScore>, StorageError> {
        let mut members = lock(&self.sets).get(set).cloned().unwrap_or_default();
        // Stable sort keeps insertion order among equal scores.
        members.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(members.into_iter().take(n).map(|(term, score)| TermScore::new(term, score)).collect())
    }
}
