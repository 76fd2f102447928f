//! Elasticsearch-compatible search index client.
//!
//! Talks to the plain REST API (`_search` with a `q` query string and
//! `_stats`) over reqwest, which is all the catalog needs.

use async_trait::async_trait;
use serde::Deserialize;
use stardex_core::SearchResult;

use crate::error::StorageError;
use crate::traits::SearchIndex;

/// Index name that targets every index on the cluster.
pub const ALL_INDICES: &str = "_all";

pub struct ElasticIndex {
    client: reqwest::Client,
    base_url: String,
    index: String,
}

impl std::fmt::Debug for ElasticIndex {
    // Hosted clusters embed credentials in the URL.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElasticIndex")
            .field("base_url", &"***")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: SearchResult,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(rename = "_all")]
    all: StatsSection,
}

#[derive(Debug, Deserialize)]
struct StatsSection {
    primaries: PrimaryStats,
}

#[derive(Debug, Deserialize)]
struct PrimaryStats {
    docs: DocStats,
}

#[derive(Debug, Deserialize)]
struct DocStats {
    count: u64,
}

impl ElasticIndex {
    /// Build a client for `base_url`, searching `index` (use [`ALL_INDICES`] for every index).
    pub fn new(
        base_url: &str,
        index: &str,
        timeout: std::time::Duration,
    ) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            index: index.trim_matches('/').to_owned(),
        })
    }

    #[must_use]
    pub fn index(&self) -> &str {
        &self.index
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<T, StorageError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StorageError::SearchStatus { code: status.as_u16(), body });
        }
        serde_json::from_str(&body).map_err(|e| StorageError::DataCorruption {
            context: format!("{context} response from search index"),
            source: Box::new(e),
        })
    }
}

#[async_trait]
impl SearchIndex for ElasticIndex {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, StorageError> {
        let request = self
            .client
            .get(format!("{}/{}/_search", self.base_url, self.index))
            .query(&[("q", query.to_owned()), ("size", max_results.to_string())]);
        let response: SearchResponse = self.get_json(request, "_search").await?;
        tracing::debug!(query, hits = response.hits.hits.len(), "search index query");
        Ok(response.hits.hits.into_iter().map(|hit| hit.source).collect())
    }

    async fn document_count(&self) -> Result<u64, StorageError> {
        let request = self.client.get(format!("{}/{}/_stats", self.base_url, self.index));
        let response: StatsResponse = self.get_json(request, "_stats").await?;
        Ok(response.all.primaries.docs.count)
    }
}
