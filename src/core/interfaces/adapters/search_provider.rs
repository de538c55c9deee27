use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::SearchResult;

#[async_trait]
pub trait ManualSearchProvider: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>>;
}
