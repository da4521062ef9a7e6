//! Office-holder claim checks: "Macron is the president of France in 2019".
//!
//! The statement is parsed into a [`RoleClaim`] (subject, role, country,
//! optional year) and judged against the summary of the "<Role> of
//! <Country>" page.

pub mod checker;
pub mod error;
pub mod parser;


pub use checker::{ClaimChecker, ClaimOutcome, ClaimVerdict};
pub use error::ClaimError;
pub use parser::{Role, RoleClaim};
