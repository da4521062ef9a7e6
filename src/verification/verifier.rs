use std::collections::HashSet;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::constants::{
    AMBIGUOUS_SIMILARITY, DEFAULT_LOOKUP_CONCURRENCY, DEFAULT_LOOKUP_TIMEOUT_MS, SUMMARY_SENTENCES,
};
use crate::entities::EntitySet;

use super::client::KnowledgeBase;
use super::similarity::{first_sentences, lexical_similarity};
use super::types::{EntityCheck, PageLookup, VerificationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Upper bound for a single lookup, after which the entity reads as unverified.
    pub lookup_timeout: Duration,
    /// Maximum lookups in flight per request.
    pub concurrency: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_millis(DEFAULT_LOOKUP_TIMEOUT_MS),
            concurrency: DEFAULT_LOOKUP_CONCURRENCY,
        }
    }
}

/// Turns extracted entities into [`VerificationResult`]s.
///
/// Lookup failures of any kind are absorbed here: the entity is reported as
/// not existing with zero similarity and the failure is logged.
#[derive(Debug, Clone)]
pub struct FactVerifier<K> {
    knowledge_base: K,
    config: VerifierConfig,
}

impl<K: KnowledgeBase> FactVerifier<K> {
    pub fn new(knowledge_base: K) -> Self {
        Self::with_config(knowledge_base, VerifierConfig::default())
    }

    pub fn with_config(knowledge_base: K, config: VerifierConfig) -> Self {
        Self {
            knowledge_base,
            config,
        }
    }

    pub fn knowledge_base(&self) -> &K {
        &self.knowledge_base
    }

    pub fn config(&self) -> VerifierConfig {
        self.config
    }

    /// Checks one name against the knowledge base, scoring the page summary
    /// against `context` (the full article text).
    pub async fn verify(&self, name: &str, context: &str) -> EntityCheck {
        let lookup =
            tokio::time::timeout(self.config.lookup_timeout, self.knowledge_base.lookup(name))
                .await;

        match lookup {
            Ok(Ok(PageLookup::Missing)) => {
                debug!(entity = %name, "No knowledge base page");
                EntityCheck::not_found()
            }
            Ok(Ok(PageLookup::Ambiguous)) => {
                debug!(entity = %name, "Knowledge base title is ambiguous");
                EntityCheck::ambiguous(AMBIGUOUS_SIMILARITY)
            }
            Ok(Ok(PageLookup::Resolved { summary })) => {
                let summary = first_sentences(&summary, SUMMARY_SENTENCES);
                let similarity = lexical_similarity(&summary, context);
                debug!(entity = %name, similarity, "Knowledge base page resolved");
                EntityCheck::resolved(summary, similarity)
            }
            Ok(Err(err)) => {
                warn!(entity = %name, error = %err, "Knowledge base lookup failed");
                EntityCheck::not_found()
            }
            Err(_) => {
                warn!(
                    entity = %name,
                    timeout_ms = self.config.lookup_timeout.as_millis() as u64,
                    "Knowledge base lookup timed out"
                );
                EntityCheck::not_found()
            }
        }
    }

    /// Verifies every distinct name in `entities`, once each.
    ///
    /// Results follow first appearance across categories (person,
    /// organization, location, date).
    pub async fn verify_all(&self, entities: &EntitySet, context: &str) -> Vec<VerificationResult> {
        let mut seen = HashSet::new();
        let names: Vec<String> = entities
            .records()
            .into_iter()
            .map(|record| record.name)
            .filter(|name| seen.insert(name.clone()))
            .collect();

        if names.is_empty() {
            return Vec::new();
        }

        let lookups = names.len();
        let results: Vec<VerificationResult> = stream::iter(names)
            .map(|name| async move {
                let check = self.verify(&name, context).await;
                VerificationResult::from_check(name, &check)
            })
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        debug!(
            lookups,
            verified = results.iter().filter(|r| r.exists).count(),
            "Entity verification complete"
        );

        results
    }
}
