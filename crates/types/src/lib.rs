//! Shared types and constants
//!
//! Pure data structures used by the engine, the renderer, the input layer and
//! the score store. Nothing in here performs I/O.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn column**: `BOARD_WIDTH / 2 - piece_width / 2`, row 0
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver tick interval |
//! | `BASE_FALL_MS` | 1000 | Fall interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_MS` | 50 | Fall interval floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.id(), 3);
//! assert_eq!(PieceKind::from_id(3), Some(PieceKind::T));
//! assert_ne!(GameAction::HardDrop, GameAction::SoftDrop);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Driver tick interval in milliseconds
pub const TICK_MS: u32 = 16;

/// Fall interval at level 1 (one row per second)
pub const BASE_FALL_MS: u32 = 1000;

/// Fall interval reduction per level
pub const FALL_STEP_MS: u32 = 50;

/// Fall interval floor
pub const MIN_FALL_MS: u32 = 50;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear points at level 1, indexed by rows cleared in a single lock.
///
/// Multiplied by the current level. Any count outside 1..=4 scores nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal offsets tried, in order, when a rotation collides.
pub const WALL_KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// A board cell: `EMPTY` or a locked piece id (`PieceKind::id`).
pub type Cell = u8;

/// Value of an empty board cell.
pub const EMPTY: Cell = 0;

/// The seven piece kinds
///
/// - **I**: Cyan bar
/// - **O**: Yellow 2x2 square
/// - **T**: Purple
/// - **S**: Green
/// - **Z**: Red (mirror of S)
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// Catalog index (0..7)
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Identifier written into the board when this kind locks.
    ///
    /// Always `index() + 1`, so it never collides with [`EMPTY`].
    pub fn id(self) -> Cell {
        self.index() as Cell + 1
    }

    /// Inverse of [`PieceKind::id`]
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// assert_eq!(PieceKind::from_id(8), None);
    /// ```
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[id as usize - 1]),
            _ => None,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Board coordinates of a piece mask origin (top-left of its bounding box).
///
/// `x` is the column, `y` the row; row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`, saturating at the `i8` range
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Discrete commands the input layer can issue between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no lock on failure)
    SoftDrop,
    /// Drop to the landing row and lock immediately
    HardDrop,
    /// Rotate 90° clockwise
    RotateCw,
    /// Rotate 90° counter-clockwise
    RotateCcw,
    /// Bank or swap the active piece
    Hold,
    /// Toggle the driver's pause state (not an engine command)
    Pause,
    /// Start a fresh game
    Restart,
}

/// Notification emitted by the engine for observers (UI, score store).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Score now has this value
    ScoreChanged(u32),
    /// This many rows were removed by a single lock
    LinesCleared(u32),
    /// The next piece could not spawn; the game has ended
    GameOver,
}
