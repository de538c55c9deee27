use similar::TextDiff;
use url::Url;

use crate::core::models::{FinderSettings, ScoredCandidate, SearchResult};

/// Domain-trust bonus for a candidate URL. Adds the trusted-domain bonus
/// when the host suffix-matches any configured manufacturer domain, and the
/// make-match bonus when the make name appears in the host. URLs that fail
/// to parse score zero.
pub fn domain_score(url: &str, make: &str, settings: &FinderSettings) -> u32 {
    let host = match Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.to_lowercase()))
    {
        Some(host) => host,
        None => return 0,
    };

    let mut score = 0;

    if settings
        .trusted_domains
        .iter()
        .any(|domain| host.ends_with(&domain.to_lowercase()))
    {
        score += settings.trusted_domain_bonus;
    }

    let make = make.trim().to_lowercase();
    if !make.is_empty() && host.contains(&make) {
        score += settings.make_match_bonus;
    }

    score
}

/// Normalized similarity in [0, 1] between the result title and the
/// combined make+model string, using a difflib-style longest-matching-blocks
/// ratio over characters.
pub fn file_score(title: &str, make: &str, model: &str) -> f64 {
    let combined = format!("{} {}", make, model).to_lowercase();
    let title = title.to_lowercase();

    TextDiff::from_chars(combined.as_str(), title.as_str()).ratio() as f64
}

pub fn combined_score(result: &SearchResult, make: &str, model: &str, settings: &FinderSettings) -> f64 {
    file_score(&result.title, make, model) + domain_score(&result.url, make, settings) as f64
}

/// Score every result and return candidates ordered best-first. The sort is
/// stable, so equally-scored candidates keep their search ranking.
pub fn rank_candidates(
    results: &[SearchResult],
    make: &str,
    model: &str,
    settings: &FinderSettings,
) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = results
        .iter()
        .map(|result| {
            let score = combined_score(result, make, model, settings);
            log::debug!(
                "[SCORER] score={:.3} title={:?} url={}",
                score,
                result.title,
                result.url
            );
            ScoredCandidate {
                score,
                title: result.title.clone(),
                url: result.url.clone(),
            }
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
}
