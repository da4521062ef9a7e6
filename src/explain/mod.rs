//! Advisory reasons shown next to a verdict.
//!
//! Computed independently of fusion and never fed back into it. The keyword
//! lists here are narrower than the heuristic scorer's (no "click here" or
//! "reported by").

use crate::constants::EXPLANATION_CONFIDENCE_THRESHOLD;
use crate::heuristics::KeywordSet;
use crate::verdict::{ConfidencePair, Verdict};


pub const SENSATIONAL_TERMS: KeywordSet = KeywordSet::new(&[
    "breaking",
    "shocking",
    "secret",
    "revealed",
    "share this",
    "before it gets deleted",
]);

pub const AUTHORITATIVE_TERMS: KeywordSet = KeywordSet::new(&[
    "official statement",
    "ministry",
    "government",
    "press release",
    "court",
    "according to",
]);

pub const SENSATIONAL_REASON: &str = "Sensational or emotionally charged language detected";
pub const AUTHORITATIVE_REASON: &str = "Mentions official or authoritative sources";
pub const INSUFFICIENT_REASON: &str = "Insufficient strong signals for a confident decision";

/// Reason strings for the raw text and the per-signal outcomes, in display order.
pub fn explain(
    text: &str,
    heuristic: Verdict,
    ml_verdict: Verdict,
    confidence: ConfidencePair,
) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut reasons = Vec::new();

    if SENSATIONAL_TERMS.any_in(&lowered) {
        reasons.push(SENSATIONAL_REASON.to_string());
    }
    if AUTHORITATIVE_TERMS.any_in(&lowered) {
        reasons.push(AUTHORITATIVE_REASON.to_string());
    }
    if confidence.fake >= EXPLANATION_CONFIDENCE_THRESHOLD {
        reasons.push(format!(
            "ML model shows high fake confidence ({:.2})",
            confidence.fake
        ));
    }
    if confidence.real >= EXPLANATION_CONFIDENCE_THRESHOLD {
        reasons.push(format!(
            "ML model shows high real confidence ({:.2})",
            confidence.real
        ));
    }
    if heuristic.is_uncertain() && ml_verdict.is_uncertain() {
        reasons.push(INSUFFICIENT_REASON.to_string());
    }

    reasons
}
