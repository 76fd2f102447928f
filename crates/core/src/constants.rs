//! Shared constants for stardex.
//!
//! Centralizes the numbers and store keys that the catalog, search and
//! statistics flows must agree on.

/// Number of items shown on one catalog page.
pub const PAGE_SIZE: u64 = 200;

/// Maximum number of hits returned by a single search.
pub const SEARCH_RESULT_LIMIT: usize = 100;

/// Sanitized queries shorter than this are counted but not recorded as terms.
pub const MIN_TERM_LENGTH: usize = 3;

/// Number of popular terms shown on the statistics page.
pub const TOP_TERMS_LIMIT: usize = 10;

/// Counter key holding the total number of searches.
pub const SEARCH_COUNTER_KEY: &str = "searches";

/// Scored-set key holding per-term search frequencies.
pub const SEARCH_TERMS_KEY: &str = "search_terms";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default HTTP timeout for the search index client.
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;
