//! Fixed-output model for tests.

use std::sync::Mutex;

use super::model::{ClassProbabilities, ProbabilityModel};
use crate::constants::{FAKE_CLASS, REAL_CLASS};

/// Returns the same probabilities for every input and records what it saw.
#[derive(Debug, Default)]
pub struct FixedProbabilities {
    probabilities: ClassProbabilities,
    seen: Mutex<Vec<String>>,
}

impl FixedProbabilities {
    pub fn new(fake: f32, real: f32) -> Self {
        Self::from_map(
            ClassProbabilities::new()
                .with(FAKE_CLASS, fake)
                .with(REAL_CLASS, real),
        )
    }

    pub fn from_map(probabilities: ClassProbabilities) -> Self {
        Self {
            probabilities,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Normalized inputs received so far.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().expect("lock poisoned").clone()
    }
}

impl ProbabilityModel for FixedProbabilities {
    fn predict_probabilities(&self, normalized: &str) -> ClassProbabilities {
        self.seen
            .lock()
            .expect("lock poisoned")
            .push(normalized.to_string());
        self.probabilities.clone()
    }
}
