//! Statistical text classifier.
//!
//! [`MlClassifier`] normalizes raw text, asks a [`ProbabilityModel`] for class
//! probabilities (`0` = FAKE, `1` = REAL) and applies a 0.10 indecision band so
//! a 51/49 split never looks like a confident label.
//!
//! The production model is [`LinearTextModel`], an exported TF-IDF + logistic
//! regression artifact. Without an artifact the classifier runs on
//! [`StubModel`] and always answers `Uncertain`.

pub mod config;
pub mod error;
pub mod linear;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod scorer;


pub use config::ClassifierConfig;
pub use error::ClassifierError;
pub use linear::{LinearTextModel, ModelArtifact};
#[cfg(any(test, feature = "mock"))]
pub use mock::FixedProbabilities;
pub use model::{ClassProbabilities, ModelMode, ProbabilityModel, StubModel};
pub use scorer::{MlClassifier, decide};
