use std::sync::Arc;

use crate::claims::ClaimChecker;
use crate::entities::EntityExtractor;
use crate::pipeline::Analyzer;
use crate::verification::KnowledgeBase;

pub struct HandlerState<E, K>
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    pub analyzer: Arc<Analyzer<E, K>>,

    pub claims: Arc<ClaimChecker<K>>,
}

impl<E, K> Clone for HandlerState<E, K>
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            claims: Arc::clone(&self.claims),
        }
    }
}

impl<E, K> HandlerState<E, K>
where
    E: EntityExtractor + 'static,
    K: KnowledgeBase + 'static,
{
    pub fn new(analyzer: Arc<Analyzer<E, K>>, claims: Arc<ClaimChecker<K>>) -> Self {
        Self { analyzer, claims }
    }
}
