//! factguard library crate (used by the binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Analysis
//! - [`Analyzer`], [`AnalysisReport`], [`AnalysisError`] - One text end to end
//! - [`HeuristicScorer`], [`KeywordHits`] - Keyword heuristics
//! - [`MlClassifier`], [`ClassifierConfig`], [`LinearTextModel`] - Statistical classifier
//! - [`fuse`], [`FinalDecision`], [`DecisionRule`] - Decision fusion
//! - [`explain`] - Advisory reasons
//!
//! ## Entities & Verification
//! - [`EntityExtractor`], [`PatternExtractor`], [`EntitySet`] - Named entities
//! - [`KnowledgeBase`], [`WikipediaClient`], [`FactVerifier`] - Knowledge-base checks
//! - [`ClaimChecker`], [`RoleClaim`] - Office-holder claims
//!
//! ## Surfaces
//! - [`gateway`] - HTTP gateway (Axum)
//! - [`cli`] - Terminal rendering and interactive loop
//! - [`Config`], [`ConfigError`] - Environment configuration
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod claims;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod entities;
pub mod explain;
pub mod fusion;
pub mod gateway;
pub mod heuristics;
pub mod pipeline;
pub mod text;
pub mod verdict;
pub mod verification;

pub use claims::{ClaimChecker, ClaimError, ClaimOutcome, ClaimVerdict, Role, RoleClaim};
#[cfg(any(test, feature = "mock"))]
pub use classifier::FixedProbabilities;
pub use classifier::{
    ClassProbabilities, ClassifierConfig, ClassifierError, LinearTextModel, MlClassifier,
    ModelArtifact, ModelMode, ProbabilityModel, StubModel,
};
pub use config::{Config, ConfigError};
pub use constants::MIN_WORD_COUNT;
#[cfg(any(test, feature = "mock"))]
pub use entities::StaticExtractor;
pub use entities::{EntityCategory, EntityExtractor, EntityRecord, EntitySet, PatternExtractor};
pub use explain::explain;
pub use fusion::{DecisionRule, FinalDecision, FusionInput, fuse};
pub use heuristics::{HeuristicScorer, KeywordHits};
pub use pipeline::{AnalysisError, AnalysisReport, Analyzer, HeuristicOutcome};
pub use text::{Stopwords, TextNormalizer, word_count};
pub use verdict::{ConfidencePair, MlPrediction, Tone, Verdict};
#[cfg(any(test, feature = "mock"))]
pub use verification::MockKnowledgeBase;
pub use verification::{
    EntityCheck, FactVerifier, KnowledgeBase, LookupError, PageLookup, VerificationResult,
    VerifierConfig, WikipediaClient,
};
