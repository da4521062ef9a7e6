//! Named-entity extraction.
//!
//! The pipeline only depends on [`EntityExtractor`]. [`PatternExtractor`] is
//! the built-in implementation: capitalized spans classified against a
//! gazetteer, institutional head words and person titles, plus year and
//! month-name date patterns.

pub mod extractor;
pub mod gazetteer;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;

#[cfg(test)]
mod tests;

pub use extractor::{EntityExtractor, PatternExtractor};
#[cfg(any(test, feature = "mock"))]
pub use mock::StaticExtractor;
pub use types::{EntityCategory, EntityRecord, EntitySet};
