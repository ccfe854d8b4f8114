//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core, input, scores, term,
//! types}` and holds the pieces the binary wires together: configuration
//! and the game session.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_scores as scores;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{ScoreRecorder, Session};
