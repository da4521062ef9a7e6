//! TF-IDF vectorizer + binary logistic regression, loaded from an exported
//! JSON artifact.
//!
//! The artifact mirrors what the training pipeline persists:
//!
//! ```json
//! {
//!   "classes": [0, 1],
//!   "vocabulary": { "government": 0, "flying cars": 1 },
//!   "idf": [1.7, 3.2],
//!   "coefficients": [0.9, -2.4],
//!   "intercept": 0.05,
//!   "ngram_range": [1, 2],
//!   "sublinear_tf": false
//! }
//! ```
//!
//! `coefficients` are for the positive class (`classes[1]`).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::error::ClassifierError;
use super::model::{ClassProbabilities, ProbabilityModel};

/// Tokens shorter than this are ignored by the vectorizer.
const MIN_TOKEN_LEN: usize = 2;

#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    pub classes: Vec<u32>,
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    pub coefficients: Vec<f32>,
    pub intercept: f32,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default)]
    pub sublinear_tf: bool,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl ModelArtifact {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let invalid = |reason: String| Err(ClassifierError::InvalidArtifact { reason });

        if self.classes.len() != 2 {
            return invalid(format!(
                "expected exactly 2 classes, got {}",
                self.classes.len()
            ));
        }
        if self.classes[0] == self.classes[1] {
            return invalid("class labels must be distinct".to_string());
        }
        if self.idf.len() != self.coefficients.len() {
            return invalid(format!(
                "idf has {} entries but coefficients has {}",
                self.idf.len(),
                self.coefficients.len()
            ));
        }
        if let Some((term, idx)) = self
            .vocabulary
            .iter()
            .find(|(_, idx)| **idx >= self.idf.len())
        {
            return invalid(format!(
                "vocabulary term '{term}' maps to index {idx}, feature count is {}",
                self.idf.len()
            ));
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return invalid(format!("invalid ngram_range ({min_n}, {max_n})"));
        }

        Ok(())
    }
}

/// Linear text model loaded from a [`ModelArtifact`].
#[derive(Debug, Clone)]
pub struct LinearTextModel {
    artifact: ModelArtifact,
    fingerprint: String,
}

impl LinearTextModel {
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        if !path.exists() {
            return Err(ClassifierError::ModelNotFound {
                path: path.to_path_buf(),
            });
        }
        if !path.is_file() {
            return Err(ClassifierError::ModelLoadFailed {
                reason: format!("model path is not a file: {}", path.display()),
            });
        }

        let bytes = std::fs::read(path)?;
        let model = Self::from_slice(&bytes)?;

        info!(
            model_path = %path.display(),
            features = model.feature_count(),
            fingerprint = %model.fingerprint,
            "Loaded classifier model"
        );

        Ok(model)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ClassifierError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        let fingerprint = blake3::hash(bytes).to_hex()[..16].to_string();
        Self::with_fingerprint(artifact, fingerprint)
    }

    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ClassifierError> {
        Self::with_fingerprint(artifact, "in-memory".to_string())
    }

    fn with_fingerprint(
        artifact: ModelArtifact,
        fingerprint: String,
    ) -> Result<Self, ClassifierError> {
        artifact.validate()?;
        Ok(Self {
            artifact,
            fingerprint,
        })
    }

    pub fn feature_count(&self) -> usize {
        self.artifact.idf.len()
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Sparse, L2-normalized TF-IDF vector for normalized text.
    pub fn vectorize(&self, normalized: &str) -> Vec<(usize, f32)> {
        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
            .collect();

        let (min_n, max_n) = self.artifact.ngram_range;
        let mut counts: HashMap<usize, f32> = HashMap::new();

        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&idx) = self.artifact.vocabulary.get(&gram) {
                    *counts.entry(idx).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut weights: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.artifact.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (idx, tf * self.artifact.idf[idx])
            })
            .collect();

        let norm: f32 = weights.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in weights.iter_mut() {
                *w /= norm;
            }
        }

        weights.sort_by_key(|(idx, _)| *idx);
        weights
    }

    /// Raw decision function (log-odds of `classes[1]`).
    pub fn decision(&self, normalized: &str) -> f32 {
        let features = self.vectorize(normalized);
        let dot: f32 = features
            .iter()
            .map(|(idx, w)| w * self.artifact.coefficients[*idx])
            .sum();
        self.artifact.intercept + dot
    }
}

impl ProbabilityModel for LinearTextModel {
    fn predict_probabilities(&self, normalized: &str) -> ClassProbabilities {
        let score = self.decision(normalized);
        let positive = sigmoid(score);

        debug!(score, positive, "Linear model decision");

        ClassProbabilities::new()
            .with(self.artifact.classes[0], 1.0 - positive)
            .with(self.artifact.classes[1], positive)
    }

    fn fingerprint(&self) -> Option<&str> {
        Some(&self.fingerprint)
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
