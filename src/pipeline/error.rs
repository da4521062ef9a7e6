use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// Shown to the user as a warning; no analysis is attempted.
    #[error("text too short for reliable analysis: {words} words, at least {minimum} required")]
    InputTooShort { words: usize, minimum: usize },
}
