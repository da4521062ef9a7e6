use serde::Serialize;
use tracing::debug;

use crate::constants::HEURISTIC_MIN_HITS;
use crate::verdict::Verdict;

use super::keywords::{FAKE_SIGNALS, KeywordSet, REAL_SIGNALS};

/// Keyword hit counts for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KeywordHits {
    pub fake: usize,
    pub real: usize,
}

impl KeywordHits {
    /// A side wins only with at least two hits and a strict majority.
    pub fn verdict(&self) -> Verdict {
        if self.fake >= HEURISTIC_MIN_HITS && self.fake > self.real {
            Verdict::LikelyFake
        } else if self.real >= HEURISTIC_MIN_HITS && self.real > self.fake {
            Verdict::LikelyReal
        } else {
            Verdict::Uncertain
        }
    }
}

/// Coarse keyword scorer over the raw (un-normalized) text.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicScorer {
    fake: KeywordSet,
    real: KeywordSet,
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self {
            fake: KeywordSet::new(FAKE_SIGNALS),
            real: KeywordSet::new(REAL_SIGNALS),
        }
    }
}

impl HeuristicScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(&self, text: &str) -> KeywordHits {
        let lowered = text.to_lowercase();
        KeywordHits {
            fake: self.fake.count_in(&lowered),
            real: self.real.count_in(&lowered),
        }
    }

    pub fn score(&self, text: &str) -> Verdict {
        let hits = self.scan(text);
        let verdict = hits.verdict();
        debug!(
            fake_hits = hits.fake,
            real_hits = hits.real,
            verdict = %verdict,
            "Heuristic scan complete"
        );
        verdict
    }
}
