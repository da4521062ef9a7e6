//! Text views used by the scorers.
//!
//! - [`TextNormalizer`] builds the classifier input (lowercased, stripped,
//!   stopword-filtered).
//! - [`word_count`] backs the minimum-length gate.

pub mod error;
pub mod normalizer;
pub mod stopwords;


pub use error::TextError;
pub use normalizer::{TextNormalizer, word_count};
pub use stopwords::{ENGLISH_STOPWORDS, Stopwords};
