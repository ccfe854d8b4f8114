//! Pieces module - the static piece catalog
//!
//! Every kind maps to a square shape mask, a primary color and a darker
//! shadow color used for the ghost piece. Masks are addressed `mask[col, row]`
//! relative to the top-left corner of the piece's bounding box.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Position, Rgb, BOARD_WIDTH};

/// Offset of a single occupied mask cell relative to the mask origin
pub type MinoOffset = (i8, i8);

/// Largest mask side (the I piece)
pub const MAX_MASK_SIZE: u8 = 4;

/// Occupied offsets of a mask; at most 4x4 cells.
pub type MaskCells = ArrayVec<MinoOffset, 16>;

/// Fixed-size shape bitmap, at most 4x4.
///
/// A mask never changes after construction. Rotation builds a new one with
/// width and height transposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    width: u8,
    height: u8,
    /// Bit `col * 4 + row` is set when that cell is occupied
    bits: u16,
}

#[inline(always)]
const fn bit(x: u8, y: u8) -> u16 {
    1 << (x as u16 * MAX_MASK_SIZE as u16 + y as u16)
}

/// Build a square mask from column-major rows of 0/1 values.
const fn square(size: u8, cols: [[u8; 4]; 4]) -> Mask {
    let mut bits = 0u16;
    let mut x = 0;
    while x < size as usize {
        let mut y = 0;
        while y < size as usize {
            if cols[x][y] != 0 {
                bits |= bit(x as u8, y as u8);
            }
            y += 1;
        }
        x += 1;
    }
    Mask {
        width: size,
        height: size,
        bits,
    }
}

const I_SHAPE: Mask = square(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_SHAPE: Mask = square(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const T_SHAPE: Mask = square(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const S_SHAPE: Mask = square(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const Z_SHAPE: Mask = square(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Mask = square(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const L_SHAPE: Mask = square(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

impl Mask {
    /// An empty mask of the given size (clamped to 4x4)
    pub fn empty(width: u8, height: u8) -> Self {
        Self {
            width: width.min(MAX_MASK_SIZE),
            height: height.min(MAX_MASK_SIZE),
            bits: 0,
        }
    }

    /// Build a mask from a list of occupied offsets.
    ///
    /// Offsets outside the bounding box are ignored.
    pub fn from_cells(width: u8, height: u8, cells: &[MinoOffset]) -> Self {
        let mut mask = Self::empty(width, height);
        for &(x, y) in cells {
            if mask.contains(x, y) {
                mask.bits |= bit(x as u8, y as u8);
            }
        }
        mask
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline(always)]
    fn contains(&self, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && (x as u8) < self.width && (y as u8) < self.height
    }

    /// Whether the cell at `(x, y)` is occupied. Out of range reads as empty.
    pub fn get(&self, x: i8, y: i8) -> bool {
        self.contains(x, y) && self.bits & bit(x as u8, y as u8) != 0
    }

    /// Number of occupied cells
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Occupied offsets, column by column
    pub fn cells(&self) -> MaskCells {
        let mut out = MaskCells::new();
        for x in 0..self.width as i8 {
            for y in 0..self.height as i8 {
                if self.get(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// A copy rotated by 90°.
    ///
    /// Width and height swap. Clockwise maps `(x, y)` to `(y, width-1-x)`,
    /// counter-clockwise maps it to `(height-1-y, x)`.
    pub fn rotated(&self, clockwise: bool) -> Self {
        let mut out = Self::empty(self.height, self.width);
        for (x, y) in self.cells() {
            let (nx, ny) = if clockwise {
                (y, self.width as i8 - 1 - x)
            } else {
                (self.height as i8 - 1 - y, x)
            };
            out.bits |= bit(nx as u8, ny as u8);
        }
        out
    }
}

/// Canonical (spawn) shape for a piece kind
pub fn shape_of(kind: PieceKind) -> Mask {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Display color for a piece kind
pub fn color_of(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),
        PieceKind::O => Rgb::new(255, 255, 0),
        PieceKind::T => Rgb::new(128, 0, 128),
        PieceKind::S => Rgb::new(0, 255, 0),
        PieceKind::Z => Rgb::new(255, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 255),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// Ghost piece color for a piece kind
pub fn shadow_color_of(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 150, 150),
        PieceKind::O => Rgb::new(150, 150, 0),
        PieceKind::T => Rgb::new(80, 0, 80),
        PieceKind::S => Rgb::new(0, 150, 0),
        PieceKind::Z => Rgb::new(150, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 150),
        PieceKind::L => Rgb::new(150, 82, 0),
    }
}

/// Spawn position for a mask: horizontally centered, top row.
pub fn spawn_position(mask: &Mask) -> Position {
    let x = (BOARD_WIDTH / 2) as i8 - (mask.width() / 2) as i8;
    Position::new(x, 0)
}
