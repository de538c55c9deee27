use std::sync::Arc;

use anyhow::Result;

use crate::core::interfaces::adapters::{
    BrowserOpener, LinkChecker, ManualDownloader, ManualSearchProvider, UserPrompter,
};
use crate::core::models::{DownloadOutcome, FinderOutcome, FinderSettings, SearchResult};
use crate::core::scoring;
use crate::global_constants;

/// Combine make and model into the search phrase.
pub fn build_query(make: &str, model: &str) -> String {
    format!(
        "{} {} {}",
        make.trim(),
        model.trim(),
        global_constants::QUERY_SUFFIX
    )
}

/// Drives the interactive find-and-download loop:
/// search, score, probe accessibility, download the best match, and fall
/// back to the browser when the user declines or validation fails.
///
/// All I/O goes through the injected adapters; the orchestrator itself only
/// makes decisions, so it runs unmodified under test with mock adapters.
pub struct ManualFinderOrchestrator {
    search_provider: Arc<dyn ManualSearchProvider>,
    link_checker: Arc<dyn LinkChecker>,
    downloader: Arc<dyn ManualDownloader>,
    browser_opener: Arc<dyn BrowserOpener>,
    prompter: Arc<dyn UserPrompter>,
    settings: FinderSettings,
}

impl ManualFinderOrchestrator {
    pub fn build(
        search_provider: Arc<dyn ManualSearchProvider>,
        link_checker: Arc<dyn LinkChecker>,
        downloader: Arc<dyn ManualDownloader>,
        browser_opener: Arc<dyn BrowserOpener>,
        prompter: Arc<dyn UserPrompter>,
        settings: FinderSettings,
    ) -> Self {
        Self {
            search_provider,
            link_checker,
            downloader,
            browser_opener,
            prompter,
            settings,
        }
    }

    pub async fn find_manual(
        &self,
        make: Option<String>,
        model: Option<String>,
    ) -> Result<FinderOutcome> {
        let mut make = make;
        let mut model = model;

        loop {
            let make_value = self.resolve_input(&mut make, global_constants::PROMPT_MAKE)?;
            let model_value = self.resolve_input(&mut model, global_constants::PROMPT_MODEL)?;

            let query = build_query(&make_value, &model_value);
            log::info!("[FINDER] Searching for: {}", query);
            self.prompter.notify(&format!("Searching for: {}", query));

            let results = match self
                .search_provider
                .search(&query, self.settings.max_results)
                .await
            {
                Ok(results) => results,
                Err(error) => {
                    log::warn!("[FINDER] Search failed: {}", error);
                    self.prompter.notify(&format!("Search failed: {}", error));
                    Vec::new()
                }
            };

            if results.is_empty() {
                self.prompter.notify("No results found.");
                if self.prompter.confirm(global_constants::PROMPT_RETRY)? {
                    make = None;
                    model = None;
                    continue;
                }
                return Ok(FinderOutcome::NoResults);
            }

            log::info!("[FINDER] Got {} results, probing accessibility", results.len());
            let (accessible, blocked) = self.filter_accessible(&results).await;

            if accessible.is_empty() {
                if let Some((result, reason)) = blocked.first() {
                    self.prompter
                        .notify(&format!("Closest result was blocked: {}", result.title));
                    self.prompter.notify(reason);
                    self.prompter.notify(&format!("Raw URL: {}", result.url));
                }
                if self.prompter.confirm(global_constants::PROMPT_RETRY)? {
                    make = None;
                    model = None;
                    continue;
                }
                return Ok(FinderOutcome::NoAccessibleResults);
            }

            let ranked =
                scoring::rank_candidates(&accessible, &make_value, &model_value, &self.settings);
            let best = match ranked.into_iter().next() {
                Some(candidate) => candidate,
                None => return Ok(FinderOutcome::NoAccessibleResults),
            };

            log::info!(
                "[FINDER] Best match: score={:.3} url={}",
                best.score,
                best.url
            );
            self.prompter.notify(&format!("Best match: {}", best.title));
            self.prompter.notify(&best.url);

            if best.score > self.settings.close_match_threshold {
                if self.prompter.confirm(global_constants::PROMPT_DOWNLOAD)? {
                    match self.downloader.download(&best.url, None).await {
                        DownloadOutcome::Saved(path) => {
                            self.prompter
                                .notify(&format!("File saved to: {}", path.display()));
                            return Ok(FinderOutcome::ManualDownloaded(path));
                        }
                        DownloadOutcome::NotPdf { url } => {
                            self.prompter.notify(
                                "File downloaded but is NOT a valid PDF (likely a web page).",
                            );
                            self.offer_open_in_browser(&url)?;
                            if self.prompter.confirm(global_constants::PROMPT_RETRY)? {
                                make = None;
                                model = None;
                                continue;
                            }
                            return Ok(FinderOutcome::DownloadFailed(
                                "downloaded file was not a valid PDF".to_string(),
                            ));
                        }
                        DownloadOutcome::Failed(reason) => {
                            self.prompter.notify(&format!("Download failed: {}", reason));
                            if self.prompter.confirm(global_constants::PROMPT_RETRY)? {
                                make = None;
                                model = None;
                                continue;
                            }
                            return Ok(FinderOutcome::DownloadFailed(reason));
                        }
                    }
                } else {
                    self.prompter.notify("Here's the link to check it yourself:");
                    self.prompter.notify(&best.url);
                    self.offer_open_in_browser(&best.url)?;
                    return Ok(FinderOutcome::LinkProvided(best.url));
                }
            } else {
                self.prompter
                    .notify("Could not find an exact match, but this might help:");
                self.prompter.notify(&best.url);
                self.offer_open_in_browser(&best.url)?;
                return Ok(FinderOutcome::LinkProvided(best.url));
            }
        }
    }

    /// Use the provided value when present and non-empty, otherwise ask.
    /// The answer is stored back so a later retry reset re-prompts.
    fn resolve_input(&self, value: &mut Option<String>, prompt: &str) -> Result<String> {
        if let Some(current) = value.as_deref() {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }

        let answer = self.prompter.ask_line(prompt)?;
        *value = Some(answer.clone());
        Ok(answer)
    }

    /// Probe every result sequentially, splitting accessible candidates
    /// from blocked ones (kept with their reason for reporting).
    async fn filter_accessible(
        &self,
        results: &[SearchResult],
    ) -> (Vec<SearchResult>, Vec<(SearchResult, String)>) {
        let mut accessible = Vec::new();
        let mut blocked = Vec::new();

        for result in results {
            match self.link_checker.check_link(&result.url).await {
                crate::core::models::LinkStatus::Accessible => {
                    log::debug!("[FINDER] Accessible: {}", result.url);
                    accessible.push(result.clone());
                }
                crate::core::models::LinkStatus::Blocked(reason) => {
                    log::debug!("[FINDER] Blocked ({}): {}", reason, result.url);
                    blocked.push((result.clone(), reason));
                }
            }
        }

        (accessible, blocked)
    }

    fn offer_open_in_browser(&self, url: &str) -> Result<()> {
        if self.prompter.confirm(global_constants::PROMPT_OPEN_BROWSER)? {
            match self.browser_opener.open_url(url) {
                Ok(()) => self.prompter.notify("Browser opened."),
                Err(error) => {
                    log::warn!("[FINDER] Failed to open browser: {}", error);
                    self.prompter
                        .notify(&format!("Failed to open browser: {}", error));
                }
            }
        }
        Ok(())
    }
}
