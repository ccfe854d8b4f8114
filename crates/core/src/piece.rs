//! Piece instance - a kind plus its current rotation mask

use crate::pieces::{color_of, shadow_color_of, shape_of, Mask, MaskCells};
use crate::types::{PieceKind, Rgb};

/// A piece value owned by the engine.
///
/// The kind never changes. The mask starts as the kind's canonical shape and
/// is only ever replaced wholesale by a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    mask: Mask,
}

impl Piece {
    /// A piece in its canonical orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            mask: shape_of(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn width(&self) -> u8 {
        self.mask.width()
    }

    pub fn height(&self) -> u8 {
        self.mask.height()
    }

    pub fn color(&self) -> Rgb {
        color_of(self.kind)
    }

    pub fn shadow_color(&self) -> Rgb {
        shadow_color_of(self.kind)
    }

    /// Occupied cells of the current mask
    pub fn cells(&self) -> MaskCells {
        self.mask.cells()
    }

    /// Rotate in place by 90°. Does not consult any board.
    pub fn rotate(&mut self, clockwise: bool) {
        self.mask = self.mask.rotated(clockwise);
    }

    /// A rotated copy, leaving `self` untouched
    pub fn rotated(&self, clockwise: bool) -> Self {
        let mut trial = *self;
        trial.rotate(clockwise);
        trial
    }
}

impl From<PieceKind> for Piece {
    fn from(kind: PieceKind) -> Self {
        Self::new(kind)
    }
}
