use serde::{Deserialize, Serialize};

use crate::verdict::{MlPrediction, Verdict};
use crate::verification::VerificationResult;

/// Everything the fusion policy looks at, all derived from the same raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionInput {
    pub heuristic: Verdict,
    pub ml: MlPrediction,
    pub verifications: Vec<VerificationResult>,
}

impl FusionInput {
    pub fn new(heuristic: Verdict, ml: MlPrediction, verifications: Vec<VerificationResult>) -> Self {
        Self {
            heuristic,
            ml,
            verifications,
        }
    }

    pub fn any_verified(&self) -> bool {
        self.verifications.iter().any(|v| v.exists)
    }
}

/// The precedence rule that produced a final verdict, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    VerifiedEntities,
    StrongFakeSignals,
    MlConfidentFake,
    MlConfidentReal,
    RuleBased,
    InsufficientSignal,
}

impl DecisionRule {
    /// Human-readable qualifier shown next to the verdict.
    pub fn qualifier(&self) -> &'static str {
        match self {
            DecisionRule::VerifiedEntities => "verified factual entities",
            DecisionRule::StrongFakeSignals => "strong fake signals",
            DecisionRule::MlConfidentFake | DecisionRule::MlConfidentReal => "ML confident",
            DecisionRule::RuleBased => "rule-based",
            DecisionRule::InsufficientSignal => "insufficient signal",
        }
    }
}

impl std::fmt::Display for DecisionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.qualifier())
    }
}

/// Final verdict with the rule that fired and the verification evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDecision {
    pub verdict: Verdict,
    pub rule: DecisionRule,
    pub qualifier: String,
    pub verifications: Vec<VerificationResult>,
}

impl FinalDecision {
    pub fn new(verdict: Verdict, rule: DecisionRule, verifications: Vec<VerificationResult>) -> Self {
        Self {
            verdict,
            rule,
            qualifier: rule.qualifier().to_string(),
            verifications,
        }
    }

    /// `"LIKELY REAL (verified factual entities)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.verdict, self.rule.qualifier())
    }
}
