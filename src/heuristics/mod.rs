//! Keyword heuristics.
//!
//! Flat counts: no weighting, no partial credit. A single hit or a
//! tie is never decisive.

pub mod keywords;
pub mod scorer;


pub use keywords::{FAKE_SIGNALS, KeywordSet, REAL_SIGNALS};
pub use scorer::{HeuristicScorer, KeywordHits};
