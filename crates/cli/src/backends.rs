//! Collaborator construction from environment variables.
//!
//! With `STARDEX_DEMO` set every collaborator is an in-memory store seeded
//! from [`crate::demo`], so no external service is contacted.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, anyhow};
use stardex_core::{DEFAULT_SEARCH_TIMEOUT_SECS, env_flag, env_parse_with_default, env_required};
use stardex_storage::traits::{CounterStore, ItemStore, SearchIndex};
use stardex_storage::{ALL_INDICES, ElasticIndex, MemoryCounterStore, PgItemStore, RedisCounterStore};

use crate::demo;

pub(crate) fn demo_mode() -> bool {
    env_flag("STARDEX_DEMO")
}

fn required(var: &str) -> Result<String> {
    env_required(var).map_err(|msg| anyhow!(msg))
}

pub(crate) async fn item_store() -> Result<Arc<dyn ItemStore>> {
    if demo_mode() {
        return Ok(Arc::new(demo::item_store()));
    }
    let url = required("DATABASE_URL")?;
    let store = PgItemStore::new(&url).await.inspect_err(|e| {
        tracing::error!(error = %e, "Cannot connect to item database");
    })?;
    Ok(Arc::new(store))
}

pub(crate) fn search_index() -> Result<Arc<dyn SearchIndex>> {
    if demo_mode() {
        return Ok(Arc::new(demo::search_index()));
    }
    let url = required("SEARCH_URL")?;
    let index = std::env::var("SEARCH_INDEX").unwrap_or_else(|_| ALL_INDICES.to_owned());
    let timeout = env_parse_with_default("STARDEX_SEARCH_TIMEOUT_SECS", DEFAULT_SEARCH_TIMEOUT_SECS);
    let client = ElasticIndex::new(&url, &index, Duration::from_secs(timeout))?;
    tracing::info!(index = %client.index(), timeout_secs = timeout, "search index configured");
    Ok(Arc::new(client))
}

pub(crate) async fn counter_store() -> Result<Arc<dyn CounterStore>> {
    if demo_mode() {
        return Ok(Arc::new(MemoryCounterStore::new()));
    }
    let url = required("REDIS_URL")?;
    let store = RedisCounterStore::connect(&url).await.inspect_err(|e| {
        tracing::error!(error = %e, "Cannot connect to counter database");
    })?;
    Ok(Arc::new(store))
}
