//! Piece catalog - static occupancy masks for every (kind, rotation)
//!
//! Every piece is authored in a 4x4 box, top-left aligned, as four clockwise
//! rotation states. Kinds with fewer distinct orientations repeat their masks so the
//! table can be indexed uniformly. The table is built at compile time and never mutated.

use crate::types::{PieceKind, Rotation, KIND_COUNT, MASK_SIZE, ROTATION_COUNT};

const N: usize = MASK_SIZE as usize;

/// 4x4 occupancy mask, indexed `[row][col]`
pub type Mask = [[bool; N]; N];

/// Offset of a single occupied mask cell relative to the piece anchor, as `(col, row)`
pub type MinoOffset = (i8, i8);

/// Occupied cells of a mask - every catalog mask has exactly four
pub type PieceShape = [MinoOffset; 4];

/// Build a mask from four rows of `#` (occupied) and `.` (empty).
const fn mask(rows: [&[u8; N]; N]) -> Mask {
    let mut out = [[false; N]; N];
    let mut row = 0;
    while row < N {
        let mut col = 0;
        while col < N {
            out[row][col] = rows[row][col] == b'#';
            col += 1;
        }
        row += 1;
    }
    out
}

const I_FLAT: Mask = mask([b"####", b"....", b"....", b"...."]);
const I_TALL: Mask = mask([b"#...", b"#...", b"#...", b"#..."]);

const O_ANY: Mask = mask([b"##..", b"##..", b"....", b"...."]);

const S_FLAT: Mask = mask([b".##.", b"##..", b"....", b"...."]);
const S_TALL: Mask = mask([b"#...", b"##..", b".#..", b"...."]);

const Z_FLAT: Mask = mask([b"##..", b".##.", b"....", b"...."]);
const Z_TALL: Mask = mask([b".#..", b"##..", b"#...", b"...."]);

/// Mask table, indexed `[kind][rotation]`.
static MASKS: [[Mask; ROTATION_COUNT]; KIND_COUNT] = [
    // I
    [I_FLAT, I_TALL, I_FLAT, I_TALL],
    // O
    [O_ANY, O_ANY, O_ANY, O_ANY],
    // T
    [
        mask([b".#..", b"###.", b"....", b"...."]),
        mask([b"#...", b"##..", b"#...", b"...."]),
        mask([b"###.", b".#..", b"....", b"...."]),
        mask([b".#..", b"##..", b".#..", b"...."]),
    ],
    // S
    [S_FLAT, S_TALL, S_FLAT, S_TALL],
    // Z
    [Z_FLAT, Z_TALL, Z_FLAT, Z_TALL],
    // J
    [
        mask([b"#...", b"###.", b"....", b"...."]),
        mask([b"##..", b"#...", b"#...", b"...."]),
        mask([b"###.", b"..#.", b"....", b"...."]),
        mask([b".#..", b".#..", b"##..", b"...."]),
    ],
    // L
    [
        mask([b"..#.", b"###.", b"....", b"...."]),
        mask([b"#...", b"#...", b"##..", b"...."]),
        mask([b"###.", b"#...", b"....", b"...."]),
        mask([b"##..", b".#..", b".#..", b"...."]),
    ],
];

/// The mask for a kind and rotation
pub fn get_mask(kind: PieceKind, rotation: Rotation) -> &'static Mask {
    &MASKS[kind.index()][rotation.index()]
}

/// Whether the mask cell at (`col`, `row`) is part of the piece.
///
/// Cells outside the 4x4 box are never occupied.
pub fn get_cell(kind: PieceKind, rotation: Rotation, col: usize, row: usize) -> bool {
    if col >= N || row >= N {
        return false;
    }
    get_mask(kind, rotation)[row][col]
}

/// Occupied cells of a kind and rotation, in row-major order
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let mask = get_mask(kind, rotation);
    let mut shape = [(0, 0); 4];
    let mut n = 0;
    for (row, cols) in mask.iter().enumerate() {
        for (col, &occupied) in cols.iter().enumerate() {
            if occupied && n < shape.len() {
                shape[n] = (col as i8, row as i8);
                n += 1;
            }
        }
    }
    shape
}

/// Number of mask rows from the top down to the lowest occupied row
pub fn piece_height(kind: PieceKind, rotation: Rotation) -> u8 {
    get_shape(kind, rotation)
        .iter()
        .map(|&(_, row)| row as u8 + 1)
        .max()
        .unwrap_or(0)
}

/// Number of mask columns from the left to the rightmost occupied column
pub fn piece_width(kind: PieceKind, rotation: Rotation) -> u8 {
    get_shape(kind, rotation)
        .iter()
        .map(|&(col, _)| col as u8 + 1)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(mask: &Mask) -> usize {
        mask.iter().flatten().filter(|&&c| c).count()
    }

    #[test]
    fn every_mask_has_four_cells() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                assert_eq!(
                    occupied(get_mask(kind, rotation)),
                    4,
                    "{:?} {:?}",
                    kind,
                    rotation
                );
            }
        }
    }

    #[test]
    fn every_mask_is_top_left_aligned() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let shape = get_shape(kind, rotation);
                assert!(shape.iter().any(|&(_, row)| row == 0), "{:?} {:?}", kind, rotation);
                assert!(shape.iter().any(|&(col, _)| col == 0), "{:?} {:?}", kind, rotation);
            }
        }
    }

    #[test]
    fn shape_matches_mask() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                for (col, row) in get_shape(kind, rotation) {
                    assert!(get_cell(kind, rotation, col as usize, row as usize));
                }
            }
        }
    }

    #[test]
    fn cells_outside_the_box_are_empty() {
        assert!(!get_cell(PieceKind::I, Rotation::North, 4, 0));
        assert!(!get_cell(PieceKind::I, Rotation::East, 0, 4));
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = get_mask(PieceKind::O, Rotation::North);
        for rotation in Rotation::ALL {
            assert_eq!(get_mask(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn two_state_pieces_repeat() {
        for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
            assert_eq!(get_mask(kind, Rotation::North), get_mask(kind, Rotation::South));
            assert_eq!(get_mask(kind, Rotation::East), get_mask(kind, Rotation::West));
            assert_ne!(get_mask(kind, Rotation::North), get_mask(kind, Rotation::East));
        }
    }

    #[test]
    fn dimensions() {
        assert_eq!(piece_height(PieceKind::I, Rotation::North), 1);
        assert_eq!(piece_width(PieceKind::I, Rotation::North), 4);
        assert_eq!(piece_height(PieceKind::I, Rotation::East), 4);
        assert_eq!(piece_width(PieceKind::I, Rotation::East), 1);
        assert_eq!(piece_height(PieceKind::O, Rotation::West), 2);
        assert_eq!(piece_height(PieceKind::T, Rotation::East), 3);
        assert_eq!(piece_width(PieceKind::L, Rotation::South), 3);
    }
}
