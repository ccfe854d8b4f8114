//! Core game logic - pure, deterministic, and testable
//!
//! All the rules of the falling-block game live here. The crate performs no
//! I/O and knows nothing about terminals or files:
//!
//! - **Deterministic**: the same seed and the same command sequence produce
//!   the same game
//! - **Allocation-free hot path**: board, masks and piece values are fixed
//!   size and `Copy`
//!
//! # Module Structure
//!
//! - [`pieces`]: static catalog of shapes, colors and shadow colors
//! - [`piece`]: a piece instance (kind plus current rotation mask)
//! - [`board`]: 10x20 grid with placement checks, locking and row clearing
//! - [`rng`]: seeded uniform piece generator
//! - [`scoring`]: line clear points, level and fall interval formulas
//! - [`game_state`]: the engine state machine
//! - [`events`]: observer trait for score, line clear and game over
//!   notifications
//! - [`snapshot`]: copyable per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each new piece is one of the seven kinds with
//!   equal probability
//! - **Rotation**: 90° mask rotation with horizontal kicks `0, -1, +1, -2, +2`
//! - **Ghost piece**: shows where the current piece would land
//! - **Hold**: bank one piece, once per locked piece
//! - **Scoring**: 100/300/500/800 for 1-4 rows, times the level
//! - **Levels**: one level per 10 rows; each level falls 50ms faster, down
//!   to 50ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, GameEvent};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.take_events(), vec![GameEvent::ScoreChanged(0)]);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The driver calls [`GameState::tick`](game_state::GameState::tick) every
//! frame (16ms) with the elapsed time. The piece falls one row whenever the
//! accumulated time reaches the fall interval for the current level.

pub mod board;
pub mod events;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use events::{dispatch, GameObserver};
pub use game_state::{ActivePiece, GamePhase, GameState};
pub use piece::Piece;
pub use pieces::{color_of, shadow_color_of, shape_of, spawn_position, Mask};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
