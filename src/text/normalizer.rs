use std::sync::Arc;

use super::stopwords::Stopwords;

/// Produces the classifier's view of an article.
///
/// The normalized string is only ever fed to the vectorizer. Heuristics and
/// explanations scan the raw text, since stopword removal would delete phrase
/// matches such as "according to".
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: Arc<Stopwords>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(Stopwords::english()))
    }
}

impl TextNormalizer {
    pub fn new(stopwords: Arc<Stopwords>) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Lowercase, drop URL tokens, keep `[a-z]` and whitespace, drop stopwords.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();

        let mut kept: Vec<String> = Vec::new();
        for raw in lowered.split_whitespace() {
            let without_url = strip_url(raw);
            let letters: String = without_url
                .chars()
                .filter(|c| c.is_ascii_lowercase())
                .collect();
            if letters.is_empty() || self.stopwords.contains(&letters) {
                continue;
            }
            kept.push(letters);
        }

        kept.join(" ")
    }
}

/// Truncates a whitespace-free token at the first `http` or `www`.
fn strip_url(token: &str) -> &str {
    let cut = [token.find("http"), token.find("www")]
        .into_iter()
        .flatten()
        .min();
    match cut {
        Some(idx) => &token[..idx],
        None => token,
    }
}

/// Number of whitespace-separated words, as used by the minimum-length gate.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
