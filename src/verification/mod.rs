//! Entity verification against an encyclopedic knowledge base.
//!
//! [`KnowledgeBase`] is the lookup seam; [`WikipediaClient`] talks to the
//! Wikipedia REST API. [`FactVerifier`] owns the policy: one lookup per
//! distinct name, bounded concurrency, a per-lookup timeout, and every
//! failure mapped to "not verified".

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod similarity;
pub mod types;
pub mod verifier;


pub use client::{KnowledgeBase, WikipediaClient};
pub use error::LookupError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockKnowledgeBase;
pub use similarity::{first_sentences, lexical_similarity};
pub use types::{EntityCheck, PageLookup, VerificationResult};
pub use verifier::{FactVerifier, VerifierConfig};
