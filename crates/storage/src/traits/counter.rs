use async_trait::async_trait;
use stardex_core::TermScore;

use crate::error::StorageError;

/// Counters and scored sets with atomic per-key increments.
///
/// Implementations must not lose increments under concurrent callers.
/// Nothing here decrements or resets.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increment `key` by one and return the new value.
    async fn increment_counter(&self, key: &str) -> Result<i64, StorageError>;

    /// Current value of `key`; zero when the key was never incremented.
    async fn get_counter(&self, key: &str) -> Result<i64, StorageError>;

    /// Add `delta` to `member` in scored set `set`, creating it at `delta`.
    /// Returns the new score.
    async fn increment_score(
        &self,
        set: &str,
        member: &str,
        delta: f64,
    ) -> Result<f64, StorageError>;

    /// The `n` highest-scored members of `set`, highest first.
    async fn top_n(&self, set: &str, n: usize) -> Result<Vec<TermScore>, StorageError>;
}
