//! Decision fusion.
//!
//! Verified facts beat statistical confidence, which beats keyword
//! heuristics. The joint fake rule needs 0.85 while the ML-only rules need
//! 0.80.

pub mod engine;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::fuse;
pub use types::{DecisionRule, FinalDecision, FusionInput};
