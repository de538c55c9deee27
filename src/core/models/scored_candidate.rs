/// A search result paired with its combined ranking score
/// (string similarity plus domain-trust bonus).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub score: f64,
    pub title: String,
    pub url: String,
}
