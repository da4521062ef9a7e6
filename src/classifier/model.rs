use std::collections::BTreeMap;

use crate::constants::{FAKE_CLASS, REAL_CLASS};

/// Class label → probability, as reported by a model.
///
/// A label the model did not report reads as `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassProbabilities(BTreeMap<u32, f32>);

impl ClassProbabilities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: u32, probability: f32) -> Self {
        self.0.insert(label, probability);
        self
    }

    pub fn insert(&mut self, label: u32, probability: f32) {
        self.0.insert(label, probability);
    }

    pub fn get(&self, label: u32) -> f32 {
        self.0.get(&label).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, label: u32) -> bool {
        self.0.contains_key(&label)
    }

    pub fn fake(&self) -> f32 {
        self.get(FAKE_CLASS)
    }

    pub fn real(&self) -> f32 {
        self.get(REAL_CLASS)
    }
}

impl FromIterator<(u32, f32)> for ClassProbabilities {
    fn from_iter<T: IntoIterator<Item = (u32, f32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelMode {
    Real,
    Stub,
}

impl ModelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelMode::Real => "real",
            ModelMode::Stub => "stub",
        }
    }
}

/// A pre-trained binary text model consumed through its class probabilities.
///
/// Input is the normalized text produced by [`crate::text::TextNormalizer`].
pub trait ProbabilityModel: Send + Sync + std::fmt::Debug {
    fn predict_probabilities(&self, normalized: &str) -> ClassProbabilities;

    fn mode(&self) -> ModelMode {
        ModelMode::Real
    }

    /// Short content digest of the loaded artifact, if any.
    fn fingerprint(&self) -> Option<&str> {
        None
    }
}

impl<T: ProbabilityModel + ?Sized> ProbabilityModel for std::sync::Arc<T> {
    fn predict_probabilities(&self, normalized: &str) -> ClassProbabilities {
        (**self).predict_probabilities(normalized)
    }

    fn mode(&self) -> ModelMode {
        (**self).mode()
    }

    fn fingerprint(&self) -> Option<&str> {
        (**self).fingerprint()
    }
}

/// Stand-in used when no model artifact is configured.
///
/// Always reports an even split, so the classifier never leaves the
/// indecision band.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubModel;

impl ProbabilityModel for StubModel {
    fn predict_probabilities(&self, _normalized: &str) -> ClassProbabilities {
        ClassProbabilities::new()
            .with(FAKE_CLASS, 0.5)
            .with(REAL_CLASS, 0.5)
    }

    fn mode(&self) -> ModelMode {
        ModelMode::Stub
    }
}
