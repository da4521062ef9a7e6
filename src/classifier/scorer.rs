use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::constants::{FAKE_CLASS, ML_INDECISION_GAP, REAL_CLASS};
use crate::text::{Stopwords, TextNormalizer};
use crate::verdict::{ConfidencePair, MlPrediction, Verdict};

use super::config::ClassifierConfig;
use super::error::ClassifierError;
use super::linear::LinearTextModel;
use super::model::{ModelMode, ProbabilityModel, StubModel};

/// Wraps a [`ProbabilityModel`] with normalization and the indecision band.
pub struct MlClassifier {
    normalizer: TextNormalizer,
    model: Box<dyn ProbabilityModel>,
}

impl std::fmt::Debug for MlClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MlClassifier")
            .field("mode", &self.model.mode())
            .field("fingerprint", &self.model.fingerprint())
            .field("stopwords", &self.normalizer.stopwords().len())
            .finish()
    }
}

impl MlClassifier {
    pub fn load(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        if let Err(msg) = config.validate() {
            return Err(ClassifierError::InvalidConfig { reason: msg });
        }

        let stopwords = Arc::new(config.load_stopwords()?);
        Self::load_with_stopwords(config, stopwords)
    }

    /// Like [`MlClassifier::load`], but normalizes with a stopword list the
    /// caller already holds so the entity extractor can share it.
    pub fn load_with_stopwords(
        config: ClassifierConfig,
        stopwords: Arc<Stopwords>,
    ) -> Result<Self, ClassifierError> {
        if let Err(msg) = config.validate() {
            return Err(ClassifierError::InvalidConfig { reason: msg });
        }

        let normalizer = TextNormalizer::new(stopwords);

        let model: Box<dyn ProbabilityModel> = match config.model_path {
            Some(ref path) => Box::new(LinearTextModel::load(path)?),
            None => {
                info!("No classifier model configured, operating in stub mode");
                Box::new(StubModel)
            }
        };

        Ok(Self { normalizer, model })
    }

    pub fn stub() -> Self {
        Self::with_model(Box::new(StubModel))
    }

    pub fn with_model(model: Box<dyn ProbabilityModel>) -> Self {
        Self {
            normalizer: TextNormalizer::default(),
            model,
        }
    }

    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn mode(&self) -> ModelMode {
        self.model.mode()
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model.mode() == ModelMode::Real
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.model.fingerprint()
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Classifies raw article text. Normalization happens here and nowhere else.
    pub fn classify(&self, text: &str) -> MlPrediction {
        let normalized = self.normalizer.normalize(text);
        let probabilities = self.model.predict_probabilities(&normalized);

        for label in [FAKE_CLASS, REAL_CLASS] {
            if !probabilities.contains(label) {
                warn!(label, "Model did not report class, reading as 0.0");
            }
        }

        let confidence = ConfidencePair::new(probabilities.fake(), probabilities.real());
        let verdict = decide(confidence);

        debug!(
            normalized_len = normalized.len(),
            fake = confidence.fake,
            real = confidence.real,
            verdict = %verdict,
            "ML classification complete"
        );

        MlPrediction {
            verdict,
            confidence,
        }
    }
}

/// Applies the indecision band to a probability pair.
pub fn decide(confidence: ConfidencePair) -> Verdict {
    if confidence.gap() < ML_INDECISION_GAP {
        Verdict::Uncertain
    } else if confidence.real > confidence.fake {
        Verdict::LikelyReal
    } else {
        Verdict::LikelyFake
    }
}
