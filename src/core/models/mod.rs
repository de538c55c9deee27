mod finder_settings;
mod link_status;
mod outcomes;
mod scored_candidate;
mod search_result;

pub use finder_settings::FinderSettings;
pub use link_status::LinkStatus;
pub use outcomes::{DownloadOutcome, FinderOutcome};
pub use scored_candidate::ScoredCandidate;
pub use search_result::SearchResult;
