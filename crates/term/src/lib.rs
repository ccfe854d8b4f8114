//! Terminal front end.
//!
//! A small game-oriented rendering layer: [`GameView`] paints a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer, and
//! [`TerminalRenderer`] flushes framebuffers to the terminal with crossterm.
//! No widget toolkit; every board cell is two terminal columns wide.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_scores as scores;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
