use super::*;
use crate::verdict::{MlPrediction, Verdict};
use crate::verification::VerificationResult;

fn input(heuristic: Verdict, ml: MlPrediction, verified: &[bool]) -> FusionInput {
    let verifications = verified
        .iter()
        .enumerate()
        .map(|(i, exists)| {
            VerificationResult::new(format!("Entity {i}"), *exists, if *exists { 0.4 } else { 0.0 })
        })
        .collect();
    FusionInput::new(heuristic, ml, verifications)
}

fn ml(verdict: Verdict, fake: f32, real: f32) -> MlPrediction {
    MlPrediction::new(verdict, fake, real)
}

#[test]
fn test_verified_entity_overrides_confident_fake_ml() {
    let decision = fuse(&input(
        Verdict::Uncertain,
        ml(Verdict::LikelyFake, 0.92, 0.08),
        &[false, true],
    ));

    assert_eq!(decision.verdict, Verdict::LikelyReal);
    assert_eq!(decision.rule, DecisionRule::VerifiedEntities);
    assert_eq!(decision.qualifier, "verified factual entities");
}

#[test]
fn test_verified_entity_ignored_when_heuristics_say_fake() {
    let decision = fuse(&input(
        Verdict::LikelyFake,
        ml(Verdict::Uncertain, 0.5, 0.5),
        &[true],
    ));

    assert_eq!(decision.verdict, Verdict::LikelyFake);
    assert_eq!(decision.rule, DecisionRule::RuleBased);
}

#[test]
fn test_unverified_entities_do_not_trigger_rule_one() {
    let decision = fuse(&input(
        Verdict::Uncertain,
        ml(Verdict::Uncertain, 0.5, 0.5),
        &[false, false],
    ));
    assert_eq!(decision.rule, DecisionRule::InsufficientSignal);
}

#[test]
fn test_strong_fake_signals_win_over_ml_only() {
    let decision = fuse(&input(
        Verdict::LikelyFake,
        ml(Verdict::LikelyFake, 0.90, 0.10),
        &[],
    ));

    assert_eq!(decision.verdict, Verdict::LikelyFake);
    assert_eq!(decision.rule, DecisionRule::StrongFakeSignals);
    assert_eq!(decision.qualifier, "strong fake signals");
}

#[test]
fn test_joint_rule_needs_higher_threshold() {
    // 0.82 satisfies the ML-only rule but not the joint one.
    let decision = fuse(&input(
        Verdict::LikelyFake,
        ml(Verdict::LikelyFake, 0.82, 0.18),
        &[],
    ));

    assert_eq!(decision.verdict, Verdict::LikelyFake);
    assert_eq!(decision.rule, DecisionRule::MlConfidentFake);
    assert_eq!(decision.qualifier, "ML confident");
}

#[test]
fn test_threshold_boundaries_are_inclusive() {
    let joint = fuse(&input(
        Verdict::LikelyFake,
        ml(Verdict::LikelyFake, 0.85, 0.15),
        &[],
    ));
    assert_eq!(joint.rule, DecisionRule::StrongFakeSignals);

    let ml_only = fuse(&input(
        Verdict::Uncertain,
        ml(Verdict::LikelyReal, 0.20, 0.80),
        &[],
    ));
    assert_eq!(ml_only.rule, DecisionRule::MlConfidentReal);
    assert_eq!(ml_only.verdict, Verdict::LikelyReal);
}

#[test]
fn test_ml_confident_real_beats_fake_heuristics() {
    let decision = fuse(&input(
        Verdict::LikelyFake,
        ml(Verdict::LikelyReal, 0.1, 0.9),
        &[],
    ));

    assert_eq!(decision.verdict, Verdict::LikelyReal);
    assert_eq!(decision.rule, DecisionRule::MlConfidentReal);
}

#[test]
fn test_unconfident_ml_falls_back_to_heuristics() {
    let decision = fuse(&input(
        Verdict::LikelyReal,
        ml(Verdict::LikelyFake, 0.70, 0.30),
        &[],
    ));

    assert_eq!(decision.verdict, Verdict::LikelyReal);
    assert_eq!(decision.rule, DecisionRule::RuleBased);
    assert_eq!(decision.label(), "LIKELY REAL (rule-based)");
}

#[test]
fn test_nothing_decisive_is_uncertain() {
    let decision = fuse(&input(
        Verdict::Uncertain,
        ml(Verdict::LikelyReal, 0.3, 0.7),
        &[],
    ));

    assert_eq!(decision.verdict, Verdict::Uncertain);
    assert_eq!(decision.qualifier, "insufficient signal");
}

#[test]
fn test_fuse_is_idempotent() {
    let input = input(
        Verdict::LikelyFake,
        ml(Verdict::LikelyFake, 0.91, 0.09),
        &[true, false],
    );

    let first = fuse(&input);
    let second = fuse(&input);
    assert_eq!(first, second);
    assert_eq!(first.verifications, input.verifications);
}

#[test]
fn test_decision_rule_serializes_snake_case() {
    let json = serde_json::to_string(&DecisionRule::MlConfidentFake).unwrap();
    assert_eq!(json, "\"ml_confident_fake\"");
}
