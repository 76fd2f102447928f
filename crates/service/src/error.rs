//! Typed error enum for the service layer.
//!
//! Collaborator failures pass through untouched inside
//! [`ServiceError::DataSourceUnavailable`]; nothing here retries.

use stardex_core::PageError;
use stardex_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Page argument is not a positive integer (or overflows).
    #[error("invalid page: {0}")]
    InvalidPage(String),

    /// Item store, search index or counter store failed.
    #[error("data source unavailable: {0}")]
    DataSourceUnavailable(#[from] StorageError),

    /// Reserved: sanitization is total, so no query is currently rejected.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl ServiceError {
    /// Whether the underlying collaborator error looks transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::DataSourceUnavailable(e) if e.is_transient())
    }
}

impl From<PageError> for ServiceError {
    fn from(err: PageError) -> Self {
        match err {
            PageError::InvalidPage(msg) => Self::InvalidPage(msg),
        }
    }
}
