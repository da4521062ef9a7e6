//! Server-rendered HTML for the browser form.

use std::fmt::Write;

use crate::pipeline::AnalysisReport;
use crate::verdict::Tone;

pub const TOO_SHORT_WARNING: &str = "Please enter a longer news article.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #1f2328; }
textarea { width: 100%; min-height: 14rem; font: inherit; padding: .5rem; }
button { margin-top: .75rem; padding: .5rem 1.25rem; font: inherit; }
.banner { padding: .75rem 1rem; border-radius: .375rem; margin: 1rem 0; font-weight: 600; }
.success { background: #dafbe1; border: 1px solid #4ac26b; }
.error { background: #ffebe9; border: 1px solid #ff8182; }
.warning { background: #fff8c5; border: 1px solid #d4a72c; }
ul.verifications li.verified { color: #1a7f37; }
ul.verifications li.unverified { color: #9a6700; }
"#;

/// Minimal HTML escaping for text and attribute content.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn banner(tone: Tone, message: &str) -> String {
    format!(
        r#"<div class="banner {}">{}</div>"#,
        tone.as_str(),
        escape_html(message)
    )
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Fake News Detector</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Fake News Detector</h1>
<p>Paste a news article below and click Analyze.</p>
{body}
</body>
</html>"#
    )
}

fn form(text: &str) -> String {
    format!(
        r#"<form method="post" action="/analyze">
<label for="text">News Text</label>
<textarea id="text" name="text">{}</textarea>
<button type="submit">Analyze</button>
</form>"#,
        escape_html(text)
    )
}

/// The input form, optionally with a warning above it.
pub fn render_form(warning: Option<&str>, text: &str) -> String {
    let mut body = String::new();
    if let Some(message) = warning {
        body.push_str(&banner(Tone::Warning, message));
    }
    body.push_str(&form(text));
    layout(&body)
}

/// The form followed by the analysis: verdict, signal details, entity
/// verification and reasons.
pub fn render_report(text: &str, report: &AnalysisReport) -> String {
    let mut body = form(text);
    let decision = &report.decision;

    let _ = write!(
        body,
        "<h2>Final Decision</h2>{}",
        banner(decision.verdict.tone(), &decision.label())
    );

    let _ = write!(
        body,
        "<h2>Analysis Details</h2>\
         <p>Rule-based result: <strong>{}</strong></p>\
         <p>ML prediction: <strong>{}</strong></p>\
         <p>ML confidence: Fake {:.2}, Real {:.2}</p>",
        report.heuristic.verdict,
        report.ml.verdict,
        report.ml.confidence.fake,
        report.ml.confidence.real,
    );

    body.push_str("<h2>Entity Verification</h2>");
    if decision.verifications.is_empty() {
        body.push_str("<p>No entities detected.</p>");
    } else {
        body.push_str(r#"<ul class="verifications">"#);
        for v in &decision.verifications {
            let class = if v.exists { "verified" } else { "unverified" };
            let _ = write!(
                body,
                r#"<li class="{class}">{}: {} (Similarity={:.2})</li>"#,
                escape_html(&v.entity),
                v.tag(),
                v.similarity
            );
        }
        body.push_str("</ul>");
    }

    if !report.reasons.is_empty() {
        body.push_str("<h2>Reasons</h2><ul>");
        for reason in &report.reasons {
            let _ = write!(body, "<li>{}</li>", escape_html(reason));
        }
        body.push_str("</ul>");
    }

    layout(&body)
}
