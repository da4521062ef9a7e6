/// Sensational phrasing typical of fabricated stories.
pub const FAKE_SIGNALS: &[&str] = &[
    "breaking",
    "shocking",
    "secret",
    "share this",
    "before it gets deleted",
    "revealed",
    "click here",
];

/// Attribution phrasing typical of sourced reporting.
pub const REAL_SIGNALS: &[&str] = &[
    "official statement",
    "ministry",
    "government",
    "according to",
    "press release",
    "court",
    "reported by",
];

/// Fixed list of lowercase phrases matched as substrings.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    terms: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(terms: &'static [&'static str]) -> Self {
        Self { terms }
    }

    /// Non-overlapping occurrences of every term in already-lowercased text.
    pub fn count_in(&self, lowered: &str) -> usize {
        self.terms.iter().map(|t| lowered.matches(*t).count()).sum()
    }

    pub fn any_in(&self, lowered: &str) -> bool {
        self.terms.iter().any(|t| lowered.contains(*t))
    }
}
