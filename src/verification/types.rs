use serde::{Deserialize, Serialize};

/// Outcome of verifying one extracted entity against the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub entity: String,
    pub exists: bool,
    /// Lexical overlap between the page summary and the article, in `[0, 1]`.
    pub similarity: f32,
}

impl VerificationResult {
    pub fn new(entity: impl Into<String>, exists: bool, similarity: f32) -> Self {
        Self {
            entity: entity.into(),
            exists,
            similarity,
        }
    }

    pub fn from_check(entity: impl Into<String>, check: &EntityCheck) -> Self {
        Self::new(entity, check.exists, check.similarity)
    }

    pub fn tag(&self) -> &'static str {
        if self.exists {
            "VERIFIED"
        } else {
            "NOT VERIFIED"
        }
    }
}

/// What the knowledge base knows about a title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    /// No page with that title.
    Missing,
    /// The title resolves to a disambiguation page.
    Ambiguous,
    /// A single page; `summary` is its lead text.
    Resolved { summary: String },
}

/// Verifier answer for a single name: `(exists, similarity, raw summary)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCheck {
    pub exists: bool,
    pub similarity: f32,
    pub summary: Option<String>,
}

impl EntityCheck {
    pub fn not_found() -> Self {
        Self {
            exists: false,
            similarity: 0.0,
            summary: None,
        }
    }

    pub fn ambiguous(similarity: f32) -> Self {
        Self {
            exists: true,
            similarity,
            summary: None,
        }
    }

    pub fn resolved(summary: String, similarity: f32) -> Self {
        Self {
            exists: true,
            similarity,
            summary: Some(summary),
        }
    }
}
