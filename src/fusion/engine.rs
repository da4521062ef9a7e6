use tracing::debug;

use crate::constants::{ML_CONFIDENT_THRESHOLD, STRONG_FAKE_THRESHOLD};
use crate::verdict::Verdict;

use super::types::{DecisionRule, FinalDecision, FusionInput};

/// Combines heuristic, ML and verification signals. First matching rule wins:
///
/// 1. any verified entity and heuristics not fake → real
/// 2. heuristics and ML both fake with fake ≥ 0.85 → fake
/// 3. ML fake with fake ≥ 0.80 → fake
/// 4. ML real with real ≥ 0.80 → real
/// 5. heuristics decisive → heuristic verdict
/// 6. otherwise uncertain
///
/// Pure: the same input always yields the same decision.
pub fn fuse(input: &FusionInput) -> FinalDecision {
    let (verdict, rule) = select_rule(input);

    debug!(
        heuristic = %input.heuristic,
        ml = %input.ml.verdict,
        fake = input.ml.confidence.fake,
        real = input.ml.confidence.real,
        verifications = input.verifications.len(),
        verdict = %verdict,
        rule = ?rule,
        "Fusion decision"
    );

    FinalDecision::new(verdict, rule, input.verifications.clone())
}

fn select_rule(input: &FusionInput) -> (Verdict, DecisionRule) {
    let heuristic = input.heuristic;
    let ml = input.ml.verdict;
    let confidence = input.ml.confidence;

    if input.any_verified() && heuristic != Verdict::LikelyFake {
        return (Verdict::LikelyReal, DecisionRule::VerifiedEntities);
    }

    if heuristic == Verdict::LikelyFake
        && ml == Verdict::LikelyFake
        && confidence.fake >= STRONG_FAKE_THRESHOLD
    {
        return (Verdict::LikelyFake, DecisionRule::StrongFakeSignals);
    }

    if ml == Verdict::LikelyFake && confidence.fake >= ML_CONFIDENT_THRESHOLD {
        return (Verdict::LikelyFake, DecisionRule::MlConfidentFake);
    }

    if ml == Verdict::LikelyReal && confidence.real >= ML_CONFIDENT_THRESHOLD {
        return (Verdict::LikelyReal, DecisionRule::MlConfidentReal);
    }

    if heuristic != Verdict::Uncertain {
        return (heuristic, DecisionRule::RuleBased);
    }

    (Verdict::Uncertain, DecisionRule::InsufficientSignal)
}
