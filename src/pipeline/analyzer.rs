use std::sync::Arc;

use tracing::{debug, info};

use crate::classifier::MlClassifier;
use crate::constants::MIN_WORD_COUNT;
use crate::entities::EntityExtractor;
use crate::explain::explain;
use crate::fusion::{FusionInput, fuse};
use crate::heuristics::HeuristicScorer;
use crate::text::word_count;
use crate::verification::{FactVerifier, KnowledgeBase};

use super::error::AnalysisError;
use super::report::{AnalysisReport, HeuristicOutcome};

/// Runs every signal over one text and fuses them.
///
/// Holds only immutable collaborators, so one instance serves concurrent
/// requests.
#[derive(Debug)]
pub struct Analyzer<E, K> {
    heuristics: HeuristicScorer,
    classifier: Arc<MlClassifier>,
    extractor: E,
    verifier: FactVerifier<K>,
}

impl<E, K> Analyzer<E, K>
where
    E: EntityExtractor,
    K: KnowledgeBase,
{
    pub fn new(classifier: Arc<MlClassifier>, extractor: E, verifier: FactVerifier<K>) -> Self {
        Self {
            heuristics: HeuristicScorer::new(),
            classifier,
            extractor,
            verifier,
        }
    }

    pub fn classifier(&self) -> &MlClassifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn verifier(&self) -> &FactVerifier<K> {
        &self.verifier
    }

    /// Rejects texts under the minimum word count, otherwise runs the full
    /// analysis. Knowledge-base failures never surface as errors.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let words = word_count(text);
        if words < MIN_WORD_COUNT {
            debug!(words, minimum = MIN_WORD_COUNT, "Rejecting short input");
            return Err(AnalysisError::InputTooShort {
                words,
                minimum: MIN_WORD_COUNT,
            });
        }

        let id = uuid::Uuid::new_v4().to_string();

        let hits = self.heuristics.scan(text);
        let heuristic = HeuristicOutcome {
            verdict: hits.verdict(),
            hits,
        };
        let ml = self.classifier.classify(text);
        let entities = self.extractor.extract(text);
        let verifications = self.verifier.verify_all(&entities, text).await;

        let decision = fuse(&FusionInput::new(heuristic.verdict, ml, verifications));
        let reasons = explain(text, heuristic.verdict, ml.verdict, ml.confidence);

        info!(
            id = %id,
            words,
            entities = entities.len(),
            verdict = %decision.verdict,
            rule = decision.rule.qualifier(),
            "Analysis complete"
        );

        Ok(AnalysisReport {
            id,
            word_count: words,
            heuristic,
            ml,
            entities,
            decision,
            reasons,
        })
    }
}
