//! Storage layer for stardex
//!
//! Collaborator traits for the item catalog, search index and analytics
//! counters, with PostgreSQL, Elasticsearch and Redis backends plus an
//! in-memory implementation of each.

mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
mod redis_counters;
mod search_index;
pub mod traits;

pub use error::StorageError;
pub use memory::{MemoryCounterStore, MemoryItemStore, MemorySearchIndex};
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgItemStore;
pub use redis_counters::RedisCounterStore;
pub use search_index::{ALL_INDICES, ElasticIndex};
