use serde::Serialize;

use crate::entities::EntitySet;
use crate::fusion::FinalDecision;
use crate::heuristics::KeywordHits;
use crate::verdict::{MlPrediction, Verdict};

/// Heuristic verdict with the keyword counts behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeuristicOutcome {
    pub verdict: Verdict,
    pub hits: KeywordHits,
}

/// Everything produced for one submitted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub id: String,
    pub word_count: usize,
    pub heuristic: HeuristicOutcome,
    pub ml: MlPrediction,
    pub entities: EntitySet,
    pub decision: FinalDecision,
    pub reasons: Vec<String>,
}

impl AnalysisReport {
    pub fn verdict(&self) -> Verdict {
        self.decision.verdict
    }
}
