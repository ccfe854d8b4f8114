//! Board module - the playfield grid
//!
//! A 10x20 grid of cell ids stored as a flat array for cache locality and
//! zero allocation. `EMPTY` (0) marks a free cell, any other value is the id
//! of the piece kind that locked there.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::pieces::Mask;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Whether `mask` placed with its origin at `(x, y)` fits.
    ///
    /// Every occupied mask cell must land inside the board on an empty cell.
    /// Rows above the board (negative) are rejected like any other
    /// out-of-bounds cell.
    pub fn is_valid_placement(&self, mask: &Mask, x: i8, y: i8) -> bool {
        mask.cells()
            .iter()
            .all(|&(dx, dy)| self.is_free(x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|&cell| cell != EMPTY)
    }

    /// Write `id` into every occupied mask cell at origin `(x, y)`.
    ///
    /// Cells above the top row are dropped. Placement validity is the
    /// caller's responsibility.
    pub fn lock(&mut self, mask: &Mask, x: i8, y: i8, id: Cell) {
        for (dx, dy) in mask.cells() {
            let py = y.saturating_add(dy);
            if py < 0 {
                continue;
            }
            self.set(x.saturating_add(dx), py, id);
        }
    }

    /// Remove every full row in one compaction pass and return how many
    /// were removed.
    ///
    /// Rows are scanned bottom to top. Non-full rows are copied down to a
    /// write frontier that starts at the bottom; everything above the
    /// frontier is zeroed. Relative order of the kept rows is preserved.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }

            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * WIDTH;
                self.cells
                    .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(EMPTY);
        cleared
    }

    /// Cells of row `y`, or None if out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= HEIGHT {
            return None;
        }
        let start = y * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major 2D grid
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * WIDTH;
            row.copy_from_slice(&self.cells[start..start + WIDTH]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build a board from text rows, top to bottom.
    ///
    /// `.` is empty; a digit `1..=7` is that piece id; any other character
    /// fills the cell with id 1. Missing rows at the top stay empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, line) in rows.iter().take(HEIGHT).enumerate() {
            for (x, ch) in line.chars().take(WIDTH).enumerate() {
                let cell = match ch {
                    '.' | ' ' => EMPTY,
                    '1'..='7' => ch as u8 - b'0',
                    _ => 1,
                };
                board.cells[(offset + i) * WIDTH + x] = cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_of;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();
        board.set(0, 0, PieceKind::I.id());
        board.set(5, 10, PieceKind::T.id());

        assert_eq!(board.cells[0], 1);
        assert_eq!(board.cells[10 * 10 + 5], 3);
    }

    #[test]
    fn from_rows_aligns_to_bottom() {
        let board = Board::from_rows(&["3.........", "##########"]);
        assert_eq!(board.get(0, 18), Some(3));
        assert!(board.is_row_full(19));
        assert!(!board.is_row_full(18));
        assert_eq!(board.get(0, 0), Some(EMPTY));
    }

    #[test]
    fn lock_drops_cells_above_the_board() {
        let mut board = Board::new();
        // Vertical I bar in column 1 with origin two rows above the board.
        board.lock(&shape_of(PieceKind::I), 0, -2, PieceKind::I.id());
        assert_eq!(board.get(1, 0), Some(1));
        assert_eq!(board.get(1, 1), Some(1));
        assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 2);
    }

    #[test]
    fn placement_rejects_negative_rows() {
        let board = Board::new();
        let i = shape_of(PieceKind::I);
        assert!(board.is_valid_placement(&i, 0, 0));
        assert!(!board.is_valid_placement(&i, 0, -1));
        assert!(board.is_valid_placement(&i, 0, 16));
        assert!(!board.is_valid_placement(&i, 0, 17));
    }

    #[test]
    fn write_grid_matches_cells() {
        let mut board = Board::new();
        board.set(7, 19, 6);
        let mut grid = [[0u8; WIDTH]; HEIGHT];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[19][7], 6);
        assert_eq!(grid[0][0], 0);
    }
}
