use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use crate::core::interfaces::adapters::ManualSearchProvider;
use crate::core::models::{FinderSettings, SearchResult};
use crate::global_constants;

/// Text search against the DuckDuckGo HTML-only endpoint, which needs no
/// API key or JavaScript and tolerates automated requests.
pub struct DuckDuckGoSearchProvider {
    client: reqwest::Client,
}

impl DuckDuckGoSearchProvider {
    pub fn build(settings: &FinderSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .user_agent(global_constants::SEARCH_USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// Unwrap DuckDuckGo's redirect links.
    ///
    /// Result anchors often point at
    /// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`;
    /// the real URL is the decoded `uddg` query parameter.
    fn unwrap_redirect(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{}", href)
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

#[async_trait]
impl ManualSearchProvider for DuckDuckGoSearchProvider {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>> {
        log::info!("[SEARCH] Querying DuckDuckGo: {}", query);

        let response = self
            .client
            .post(global_constants::DUCKDUCKGO_HTML_ENDPOINT)
            .form(&[("q", query)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?;

        let html = response.text().await?;
        log::debug!("[SEARCH] Response received: {} bytes", html.len());

        let results = parse_result_page(&html, max_results)?;
        log::info!("[SEARCH] Parsed {} results", results.len());

        Ok(results)
    }
}

/// Parse a DuckDuckGo HTML result page into title/URL pairs.
/// Free function so it can be tested against mock HTML.
pub(crate) fn parse_result_page(html: &str, max_results: usize) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);

    let result_selector = Selector::parse(".result:not(.result--ad), .web-result:not(.result--ad)")
        .map_err(|error| anyhow::anyhow!("invalid result selector: {:?}", error))?;
    let title_selector = Selector::parse(".result__a")
        .map_err(|error| anyhow::anyhow!("invalid title selector: {:?}", error))?;

    let mut results = Vec::new();

    for element in document.select(&result_selector) {
        let title_element = match element.select(&title_selector).next() {
            Some(el) => el,
            None => continue,
        };

        let title = title_element.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }

        let href = match title_element.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        let url = match DuckDuckGoSearchProvider::unwrap_redirect(href) {
            Some(url) => url,
            None => continue,
        };

        results.push(SearchResult { title, url });

        if results.len() >= max_results {
            break;
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_DDG_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.trane.com%2Frtu-1234.pdf&amp;rut=abc123">
        Trane RTU-1234 Operations and Maintenance Manual
    </a>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="https://www.manualslib.com/trane/rtu-1234">
        Trane RTU-1234 Manuals | ManualsLib
    </a>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fhvacforum.example.com%2Fthread%2F42&amp;rut=def456">
        Anyone have the RTU-1234 manual? - HVAC Forum
    </a>
</div>
</body>
</html>"#;

    #[test]
    fn test_unwrap_redirect_extracts_wrapped_url() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fmanual.pdf&rut=abc";
        assert_eq!(
            DuckDuckGoSearchProvider::unwrap_redirect(href),
            Some("https://example.com/manual.pdf".to_string())
        );
    }

    #[test]
    fn test_unwrap_redirect_passes_direct_link_through() {
        let href = "https://example.com/direct.pdf";
        assert_eq!(
            DuckDuckGoSearchProvider::unwrap_redirect(href),
            Some("https://example.com/direct.pdf".to_string())
        );
    }

    #[test]
    fn test_unwrap_redirect_rejects_invalid_url() {
        assert!(DuckDuckGoSearchProvider::unwrap_redirect("not-a-url").is_none());
    }

    #[test]
    fn test_parse_result_page_extracts_titles_and_urls() {
        let results = parse_result_page(MOCK_DDG_HTML, 10).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].title,
            "Trane RTU-1234 Operations and Maintenance Manual"
        );
        assert_eq!(results[0].url, "https://www.trane.com/rtu-1234.pdf");
        assert_eq!(results[1].url, "https://www.manualslib.com/trane/rtu-1234");
        assert!(results[2].url.contains("hvacforum.example.com"));
    }

    #[test]
    fn test_parse_result_page_respects_max_results() {
        let results = parse_result_page(MOCK_DDG_HTML, 2).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_parse_result_page_empty_document() {
        let results = parse_result_page("<html><body></body></html>", 10).unwrap();
        assert!(results.is_empty());
    }
}
