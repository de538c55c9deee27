use async_trait::async_trait;

use crate::core::models::DownloadOutcome;

/// Fetches a manual to local disk and validates it is a genuine PDF.
/// Implementations must never fail: every error becomes a
/// `DownloadOutcome` variant.
#[async_trait]
pub trait ManualDownloader: Send + Sync {
    async fn download(&self, url: &str, filename: Option<&str>) -> DownloadOutcome;
}
