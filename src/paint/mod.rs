//! Paint controller
//!
//! Tool selection, pointer-driven drawing with preview and commit, and
//! replayable sketch scripts.

mod state;
mod sketch;

pub use state::*;
pub use sketch::*;
