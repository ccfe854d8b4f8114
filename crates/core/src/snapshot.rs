//! Read-only view of a game for renderers
//!
//! Plain `Copy` data: a renderer gets everything it needs for one frame
//! without borrowing the engine.

use crate::game_state::ActivePiece;
use crate::pieces::Mask;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.piece.kind(),
            mask: *value.piece.mask(),
            x: value.pos.x,
            y: value.pos.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    /// Landing row of the active piece
    pub shadow_y: Option<i8>,
    pub next: PieceKind,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    /// Occupied board cells as `(x, y, id)`, top to bottom.
    pub fn locked_cells(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.board.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &id)| id != 0)
                .map(move |(x, &id)| (x as u8, y as u8, id))
        })
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            shadow_y: None,
            next: PieceKind::I,
            hold: None,
            can_hold: true,
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_cells_skips_empty() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = 1;
        snap.board[2][9] = 7;
        let cells: Vec<_> = snap.locked_cells().collect();
        assert_eq!(cells, vec![(9, 2, 7), (0, 19, 1)]);
    }
}
