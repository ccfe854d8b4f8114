//! Terminal input layer.
//!
//! Maps `crossterm` key events onto [`GameAction`]s and the quit request.
//! Repeat timing is left to the terminal's own key repeat; each press or
//! repeat yields exactly one command.

pub mod keymap;

pub use blockfall_types as types;

pub use keymap::{map_key, KeyCommand, KEY_HELP};
