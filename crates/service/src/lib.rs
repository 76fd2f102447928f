//! Service layer for stardex
//!
//! Business logic between the HTTP handlers / CLI and the storage
//! collaborators: catalog paging, item search and search analytics.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod analytics_service;
mod catalog_service;
mod error;
mod search_service;
#[cfg(test)]
mod tests;

pub use analytics_service::AnalyticsService;
pub use catalog_service::CatalogService;
pub use error::ServiceError;
pub use search_service::{SearchService, wildcard_query};
