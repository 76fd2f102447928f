//! Collaborator traits for the catalog.
//!
//! The service layer only talks to these three interfaces. Each has a
//! production backend (PostgreSQL, Elasticsearch, Redis) and an in-memory
//! backend used by tests and demo mode.

pub mod counter;
pub mod item;
pub mod search;

pub use counter::CounterStore;
pub use item::ItemStore;
pub use search::SearchIndex;
