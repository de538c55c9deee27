use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::core::interfaces::adapters::ManualDownloader;
use crate::core::models::{DownloadOutcome, FinderSettings};
use crate::global_constants;

/// Checks the 4-byte PDF signature. Anything shorter than the signature is
/// invalid by definition.
pub fn is_valid_pdf_header(bytes: &[u8]) -> bool {
    bytes.len() >= global_constants::PDF_MAGIC.len()
        && &bytes[..global_constants::PDF_MAGIC.len()] == global_constants::PDF_MAGIC
}

/// Streams a manual to the configured output directory and validates the
/// PDF signature of the written file. Files failing validation are deleted.
pub struct ReqwestManualDownloader {
    client: reqwest::Client,
    output_dir: PathBuf,
}

impl ReqwestManualDownloader {
    pub fn build(settings: &FinderSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            output_dir: settings.output_dir.clone(),
        })
    }

    /// Pick the target filename: the explicit name when given, else the
    /// last URL path segment, else a generic fallback. The name is
    /// percent-decoded, spaces become underscores and parentheses are
    /// stripped.
    fn derive_filename(url: &str, explicit: Option<&str>) -> String {
        let raw = explicit
            .map(str::to_string)
            .or_else(|| {
                url::Url::parse(url).ok().and_then(|parsed| {
                    parsed
                        .path_segments()
                        .and_then(|segments| segments.last().map(str::to_string))
                        .filter(|segment| !segment.is_empty())
                })
            })
            .unwrap_or_else(|| global_constants::DEFAULT_MANUAL_FILENAME.to_string());

        let decoded = urlencoding::decode(&raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or(raw);

        let sanitized = decoded.replace(' ', "_").replace(['(', ')'], "");

        if sanitized.is_empty() {
            global_constants::DEFAULT_MANUAL_FILENAME.to_string()
        } else {
            sanitized
        }
    }

    async fn try_download(&self, url: &str, filename: Option<&str>) -> Result<DownloadOutcome> {
        log::info!("[DOWNLOAD] Fetching {}", url);

        let mut response = self.client.get(url).send().await?.error_for_status()?;

        tokio::fs::create_dir_all(&self.output_dir).await?;

        let target_path = self.output_dir.join(Self::derive_filename(url, filename));
        log::debug!("[DOWNLOAD] Writing to {:?}", target_path);

        let mut file = tokio::fs::File::create(&target_path).await?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        drop(file);

        if !file_has_pdf_header(&target_path).await {
            log::warn!(
                "[DOWNLOAD] {:?} is not a valid PDF, deleting it",
                target_path
            );
            if let Err(error) = tokio::fs::remove_file(&target_path).await {
                log::warn!("[DOWNLOAD] Failed to delete invalid file: {}", error);
            }
            return Ok(DownloadOutcome::NotPdf {
                url: url.to_string(),
            });
        }

        let resolved = target_path.canonicalize().unwrap_or(target_path);
        log::info!("[DOWNLOAD] Saved manual to {:?}", resolved);
        Ok(DownloadOutcome::Saved(resolved))
    }
}

#[async_trait]
impl ManualDownloader for ReqwestManualDownloader {
    async fn download(&self, url: &str, filename: Option<&str>) -> DownloadOutcome {
        match self.try_download(url, filename).await {
            Ok(outcome) => outcome,
            Err(error) => {
                log::warn!("[DOWNLOAD] Download failed: {}", error);
                DownloadOutcome::Failed(error.to_string())
            }
        }
    }
}

async fn file_has_pdf_header(path: &Path) -> bool {
    let mut file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(_) => return false,
    };

    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic).await {
        Ok(_) => is_valid_pdf_header(&magic),
        Err(_) => false,
    }
}
