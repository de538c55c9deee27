use std::fmt;
use std::path::PathBuf;

/// Result of a single download attempt.
///
/// `NotPdf` means the HTTP transfer succeeded but the written file failed
/// the PDF signature check and was deleted; the URL is kept so the caller
/// can offer the browser fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    NotPdf { url: String },
    Failed(String),
}

/// Terminal result of one finder run. Every exit path of the interactive
/// loop maps to exactly one variant, so callers never have to sniff
/// prefixes out of a string.
#[derive(Debug, Clone, PartialEq)]
pub enum FinderOutcome {
    ManualDownloaded(PathBuf),
    LinkProvided(String),
    NoResults,
    NoAccessibleResults,
    DownloadFailed(String),
}

impl fmt::Display for FinderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinderOutcome::ManualDownloaded(path) => {
                write!(f, "File saved to: {}", path.display())
            }
            FinderOutcome::LinkProvided(url) => write!(f, "Manual link: {}", url),
            FinderOutcome::NoResults => write!(f, "No results found."),
            FinderOutcome::NoAccessibleResults => write!(f, "No accessible manuals found."),
            FinderOutcome::DownloadFailed(reason) => write!(f, "Download failed: {}", reason),
        }
    }
}
