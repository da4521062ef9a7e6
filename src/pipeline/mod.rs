//! One analysis request end to end: length gate, heuristics, classifier,
//! entity extraction and verification, fusion, explanation.

pub mod analyzer;
pub mod error;
pub mod report;


pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use report::{AnalysisReport, HeuristicOutcome};
