//! HTTP front end for stardex.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod response_types;
pub mod views;
mod viewer;

use axum::{
    Json, Router,
    http::Method,
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use stardex_service::{AnalyticsService, CatalogService, SearchService};

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Holds only service handles; every piece of mutable state lives in the
/// external stores behind them.
pub struct AppState {
    /// Catalog paging
    pub catalog_service: Arc<CatalogService>,
    /// Item search (records analytics)
    pub search_service: Arc<SearchService>,
    /// Statistics page data
    pub analytics_service: Arc<AnalyticsService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]);

    Router::new()
        .route("/", get(viewer::serve_index))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/all", get(handlers::catalog::first_page))
        .route("/all/{page}", get(handlers::catalog::numbered_page))
        .route("/api/items", get(handlers::catalog::first_page_json))
        .route("/api/items/{page}", get(handlers::catalog::numbered_page_json))
        .route("/stats", get(handlers::stats::stats_page))
        .route("/api/stats", get(handlers::stats::stats_json))
        .route("/api/search/{query}", get(handlers::search::search_items))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
