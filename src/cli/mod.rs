//! Terminal front end: the plain-text report card and the interactive loop.

pub mod render;
pub mod session;


pub use render::{BANNER, TOO_SHORT_MESSAGE, render_claim, render_report};
pub use session::run_interactive;
