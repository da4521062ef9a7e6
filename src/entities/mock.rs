//! Canned extractor for tests.

use super::extractor::EntityExtractor;
use super::types::{EntityCategory, EntitySet};

/// Returns the same entities regardless of input.
#[derive(Debug, Clone, Default)]
pub struct StaticExtractor {
    entities: EntitySet,
}

impl StaticExtractor {
    pub fn new(entities: EntitySet) -> Self {
        Self { entities }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: EntityCategory, name: &str) -> Self {
        self.entities.insert(category, name);
        self
    }
}

impl EntityExtractor for StaticExtractor {
    fn extract(&self, _text: &str) -> EntitySet {
        self.entities.clone()
    }
}
