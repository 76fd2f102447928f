use thiserror::Error;

/// Rejected page request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("invalid page: {0}")]
    InvalidPage(String),
}
