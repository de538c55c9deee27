use async_trait::async_trait;

use crate::core::models::LinkStatus;

/// Probes a candidate URL for accessibility. Implementations must never
/// fail: transport errors are reported as `LinkStatus::Blocked`.
#[async_trait]
pub trait LinkChecker: Send + Sync {
    async fn check_link(&self, url: &str) -> LinkStatus;
}
