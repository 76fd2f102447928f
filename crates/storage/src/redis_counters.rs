//! Redis-backed counters and scored sets.
//!
//! `INCR` and `ZINCRBY` are atomic per key on the server, so concurrent
//! requests never lose increments and no client-side locking is needed.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use stardex_core::TermScore;

use crate::error::StorageError;
use crate::traits::CounterStore;

#[derive(Clone)]
pub struct RedisCounterStore {
    conn: MultiplexedConnection,
}

impl std::fmt::Debug for RedisCounterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCounterStore").finish_non_exhaustive()
    }
}

impl RedisCounterStore {
    /// Open a multiplexed connection to `url`.
    pub async fn connect(url: &str) -> Result<Self, StorageError> {
        let client = redis::Client::open(url)?;
        let conn = client.get_multiplexed_async_connection().await?;
        tracing::info!("RedisCounterStore connected");
        Ok(Self { conn })
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment_counter(&self, key: &str) -> Result<i64, StorageError> {
        let mut conn = self.conn.clone();
        let value: i64 = conn.incr(key, 1_i64).await?;
        Ok(value)
    }

    async fn get_counter(&self, key: &str) -> Result<i64, StorageError> {
        let mut conn = self.conn.clone();
        let value: Option<i64> = conn.get(key).await?;
        Ok(value.unwrap_or(0))
    }

    async fn increment_score(
        &self,
        set: &str,
        member: &str,
        delta: f64,
    ) -> Result<f64, StorageError> {
        let mut conn = self.conn.clone();
        let score: f64 = conn.zincr(set, member, delta).await?;
        Ok(score)
    }

    // Equal scores come back in Redis's own order (reverse lexicographic).
    async fn top_n(&self, set: &str, n: usize) -> Result<Vec<TermScore>, StorageError> {
        if n == 0 {
            return Ok(Vec::new());
        }
        let stop = isize::try_from(n - 1).unwrap_or(isize::MAX);
        let mut conn = self.conn.clone();
        let rows: Vec<(String, f64)> = conn.zrevrange_withscores(set, 0, stop).await?;
        Ok(rows.into_iter().map(|(term, score)| TermScore::new(term, score)).collect())
    }
}
