//! Typed error enum for the storage layer.
//!
//! Every collaborator (item store, search index, counter store) reports
//! failures through [`StorageError`], so callers can tell an unreachable
//! backend from corrupt data without downcasting.

use thiserror::Error;

/// Storage-layer error covering the three external collaborators.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / pool timeout failure in the item store.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The search index could not be reached.
    #[error("search index request failed: {0}")]
    SearchRequest(#[from] reqwest::Error),

    /// The search index answered with a non-success status.
    #[error("search index returned HTTP {code}: {body}")]
    SearchStatus { code: u16, body: String },

    /// Counter / scored-set store failure.
    #[error("counter store error: {0}")]
    Counter(#[from] redis::RedisError),

    /// Backend data could not be decoded into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Database(e) => matches!(e, sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)),
            Self::SearchRequest(e) => e.is_timeout() || e.is_connect(),
            Self::SearchStatus { code, .. } => matches!(code, 429 | 502 | 503 | 504),
            Self::Counter(e) => e.is_io_error() || e.is_timeout() || e.is_connection_dropped(),
            Self::DataCorruption { .. } | Self::Migration(_) => false,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}
