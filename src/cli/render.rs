use std::fmt::Write;

use crate::claims::{ClaimOutcome, ClaimVerdict};
use crate::pipeline::AnalysisReport;
use crate::verdict::Tone;
use crate::verification::VerificationResult;

pub const BANNER: &str = "\n=== ADVANCED FAKE NEWS DETECTION SYSTEM ===\n";

pub const TOO_SHORT_MESSAGE: &str =
    "⚠️ Input too short for reliable analysis. Please enter full news content.";

fn marker(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "✅",
        Tone::Error => "❌",
        Tone::Warning => "⚠️",
    }
}

fn verification_line(v: &VerificationResult) -> String {
    let status = if v.exists { "VERIFIED ✅" } else { "NOT VERIFIED ⚠️" };
    format!("{}: {} (Similarity={:.2})", v.entity, status, v.similarity)
}

/// Report card: detected entities, final decision, signal details, entity
/// verification, reasons.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let decision = &report.decision;

    let _ = writeln!(out, "\nENTITIES DETECTED:");
    let mut any = false;
    for (category, names) in report.entities.groups() {
        any = true;
        let _ = writeln!(out, "{category}: {}", names.join(", "));
    }
    if !any {
        let _ = writeln!(out, "(none)");
    }

    let _ = writeln!(
        out,
        "\nFINAL DECISION : {} {}",
        marker(decision.verdict.tone()),
        decision.label()
    );

    let _ = writeln!(out, "\n--- RESULTS ---");
    let _ = writeln!(out, "Rule-based Check : {}", report.heuristic.verdict);
    let _ = writeln!(out, "ML Prediction   : {}", report.ml.verdict);
    let _ = writeln!(
        out,
        "ML Confidence   : Fake={:.2}, Real={:.2}",
        report.ml.confidence.fake, report.ml.confidence.real
    );

    let _ = writeln!(out, "\n--- ENTITY VERIFICATION ---");
    if decision.verifications.is_empty() {
        let _ = writeln!(out, "(no entities to verify)");
    }
    for v in &decision.verifications {
        let _ = writeln!(out, "{}", verification_line(v));
    }

    if !report.reasons.is_empty() {
        let _ = writeln!(out, "\nREASONS:");
        for reason in &report.reasons {
            let _ = writeln!(out, "• {reason}");
        }
    }

    out
}

pub fn render_claim(outcome: &ClaimOutcome) -> String {
    let tone = match outcome.verdict {
        ClaimVerdict::True => Tone::Success,
        ClaimVerdict::False => Tone::Error,
        ClaimVerdict::Unknown => Tone::Warning,
    };
    format!(
        "Claim   : {} / {}{}\nVerdict : {} {}\nReason  : {}\n",
        outcome.claim.subject,
        outcome.claim.page_title(),
        outcome
            .claim
            .year
            .map(|y| format!(" / {y}"))
            .unwrap_or_default(),
        marker(tone),
        outcome.verdict,
        outcome.reason
    )
}
