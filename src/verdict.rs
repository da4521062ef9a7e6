//! Shared verdict and confidence types.

use serde::{Deserialize, Serialize};

/// Three-way classification produced by every scorer and by the fusion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    LikelyReal,
    LikelyFake,
    Uncertain,
}

/// How a verdict should be presented (success / error / warning styling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::LikelyReal => "LIKELY REAL",
            Verdict::LikelyFake => "LIKELY FAKE",
            Verdict::Uncertain => "UNCERTAIN",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Verdict::LikelyReal => Tone::Success,
            Verdict::LikelyFake => Tone::Error,
            Verdict::Uncertain => Tone::Warning,
        }
    }

    pub fn is_uncertain(&self) -> bool {
        matches!(self, Verdict::Uncertain)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Tone {
    /// CSS class / log label for this tone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
            Tone::Warning => "warning",
        }
    }
}

/// `(fake, real)` probabilities from the classifier.
///
/// Not required to sum to exactly 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidencePair {
    pub fake: f32,
    pub real: f32,
}

impl ConfidencePair {
    pub fn new(fake: f32, real: f32) -> Self {
        Self { fake, real }
    }

    /// Absolute difference between the two class probabilities.
    pub fn gap(&self) -> f32 {
        (self.real - self.fake).abs()
    }
}

/// Classifier output: a verdict plus the probabilities it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub verdict: Verdict,
    pub confidence: ConfidencePair,
}

impl MlPrediction {
    pub fn new(verdict: Verdict, fake: f32, real: f32) -> Self {
        Self {
            verdict,
            confidence: ConfidencePair::new(fake, real),
        }
    }
}
