//! Cross-cutting, shared constants.
//!
//! The joint heuristic+ML fake rule uses 0.85, the ML-only rules 0.80.
//! Keep them in sync with the tests in `fusion`.

/// Inputs with fewer whitespace-separated words are rejected before analysis.
pub const MIN_WORD_COUNT: usize = 10;

/// Minimum number of keyword hits before the heuristic scorer commits.
pub const HEURISTIC_MIN_HITS: usize = 2;

/// Below this `|real - fake|` gap the classifier reports `Uncertain`.
pub const ML_INDECISION_GAP: f32 = 0.10;

/// Fake probability required when heuristics and ML both say fake.
pub const STRONG_FAKE_THRESHOLD: f32 = 0.85;

/// Probability required for the ML-only rules (either direction).
pub const ML_CONFIDENT_THRESHOLD: f32 = 0.80;

/// Probability at which the explanation generator mentions ML confidence.
pub const EXPLANATION_CONFIDENCE_THRESHOLD: f32 = 0.75;

/// Similarity reported for a knowledge-base hit with several candidate pages.
pub const AMBIGUOUS_SIMILARITY: f32 = 0.30;

/// Sentences kept from a knowledge-base summary before comparing it to the text.
pub const SUMMARY_SENTENCES: usize = 2;

pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_LOOKUP_CONCURRENCY: usize = 4;

/// Class label used for FAKE by the exported model.
pub const FAKE_CLASS: u32 = 0;

/// Class label used for REAL by the exported model.
pub const REAL_CLASS: u32 = 1;
