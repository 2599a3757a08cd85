//! Shared geometry helpers: bounds tests and probe directions.
//!
//! Coordinates: (x, y) where x is the column (0 at the left) and y the row
//! (0 at the top). Piece cells are mask offsets added to the piece anchor.

use crate::catalog::PieceShape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether (x, y) lies outside the board
#[inline(always)]
pub fn is_out_of_stage(x: i8, y: i8) -> bool {
    x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
}

/// Direction a collision test looks in.
///
/// All three probes look one row below the piece. Lateral probes are therefore
/// diagonal: a move is only checked against the row the piece would drift into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Bottom,
    Left,
    Right,
}

impl Probe {
    /// `(dx, dy)` added to every occupied cell
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Probe::Bottom => (0, 1),
            Probe::Left => (-1, 1),
            Probe::Right => (1, 1),
        }
    }
}

/// Board cells covered by `shape` anchored at (x, y)
pub fn place(shape: PieceShape, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> {
    shape
        .into_iter()
        .map(move |(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
}
