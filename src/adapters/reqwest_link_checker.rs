use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::core::interfaces::adapters::LinkChecker;
use crate::core::models::{FinderSettings, LinkStatus};

/// Probes candidate URLs with a HEAD request, following redirects.
/// Transport errors never escape; they become a blocked reason.
pub struct ReqwestLinkChecker {
    client: reqwest::Client,
}

impl ReqwestLinkChecker {
    pub fn build(settings: &FinderSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl LinkChecker for ReqwestLinkChecker {
    async fn check_link(&self, url: &str) -> LinkStatus {
        log::debug!("[LINK] Probing {}", url);

        let response = match self.client.head(url).send().await {
            Ok(response) => response,
            Err(error) => {
                log::debug!("[LINK] Probe failed for {}: {}", url, error);
                return LinkStatus::Blocked(format!("error checking link: {}", error));
            }
        };

        match response.status() {
            StatusCode::OK => LinkStatus::Accessible,
            StatusCode::FORBIDDEN => {
                LinkStatus::Blocked("access forbidden (login required)".to_string())
            }
            StatusCode::NOT_FOUND => LinkStatus::Blocked("file not found (404)".to_string()),
            status => LinkStatus::Blocked(format!("HTTP {} returned", status.as_u16())),
        }
    }
}
