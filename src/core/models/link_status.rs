use std::fmt;

/// Result of probing a candidate URL with a lightweight HEAD request.
///
/// Blocked links carry a human-readable reason so the orchestrator can
/// surface why a candidate was skipped; transport errors never propagate
/// past the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Accessible,
    Blocked(String),
}

impl LinkStatus {
    pub fn is_accessible(&self) -> bool {
        matches!(self, LinkStatus::Accessible)
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Accessible => write!(f, "accessible"),
            LinkStatus::Blocked(reason) => write!(f, "blocked: {}", reason),
        }
    }
}
