//! Piece catalog tests - mask lookup and rotation cycles

use tui_stage::core::{get_cell, get_mask, get_shape, piece_height, piece_width};
use tui_stage::types::{PieceKind, Rotation, MASK_SIZE};

fn render(kind: PieceKind, rotation: Rotation) -> Vec<String> {
    (0..MASK_SIZE as usize)
        .map(|row| {
            (0..MASK_SIZE as usize)
                .map(|col| if get_cell(kind, rotation, col, row) { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_t_piece_rotates_clockwise() {
    assert_eq!(render(PieceKind::T, Rotation::North), vec![".#..", "###.", "....", "...."]);
    assert_eq!(render(PieceKind::T, Rotation::East), vec!["#...", "##..", "#...", "...."]);
    assert_eq!(render(PieceKind::T, Rotation::South), vec!["###.", ".#..", "....", "...."]);
    assert_eq!(render(PieceKind::T, Rotation::West), vec![".#..", "##..", ".#..", "...."]);
}

#[test]
fn test_i_piece_masks() {
    assert_eq!(render(PieceKind::I, Rotation::North), vec!["####", "....", "....", "...."]);
    assert_eq!(render(PieceKind::I, Rotation::East), vec!["#...", "#...", "#...", "#..."]);
}

#[test]
fn test_j_and_l_are_mirrors() {
    for rotation in [Rotation::North, Rotation::South] {
        let j = render(PieceKind::J, rotation);
        let l = render(PieceKind::L, rotation);
        for (jr, lr) in j.iter().zip(l.iter()) {
            let mirrored: String = jr[..3].chars().rev().collect();
            assert_eq!(mirrored, lr[..3]);
        }
    }
}

#[test]
fn test_s_and_z_are_mirrors() {
    let s = render(PieceKind::S, Rotation::North);
    let z = render(PieceKind::Z, Rotation::North);
    for (sr, zr) in s.iter().zip(z.iter()) {
        let mirrored: String = sr[..3].chars().rev().collect();
        assert_eq!(mirrored, zr[..3]);
    }
}

#[test]
fn test_rotation_index_wraps() {
    for kind in PieceKind::ALL {
        for i in 0..8 {
            assert_eq!(
                get_mask(kind, Rotation::from_index(i)),
                get_mask(kind, Rotation::from_index(i % 4))
            );
        }
    }
}

#[test]
fn test_shapes_stay_inside_mask() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let shape = get_shape(kind, rotation);
            assert_eq!(shape.len(), 4);
            for (col, row) in shape {
                assert!((0..MASK_SIZE as i8).contains(&col));
                assert!((0..MASK_SIZE as i8).contains(&row));
            }
            assert!(piece_height(kind, rotation) <= MASK_SIZE);
            assert!(piece_width(kind, rotation) <= MASK_SIZE);
        }
    }
}

#[test]
fn test_kinds_are_distinct() {
    for a in PieceKind::ALL {
        for b in PieceKind::ALL {
            if a != b {
                let same = Rotation::ALL
                    .iter()
                    .any(|&r| Rotation::ALL.iter().any(|&s| get_mask(a, r) == get_mask(b, s)));
                assert!(!same, "{:?} and {:?} share a mask", a, b);
            }
        }
    }
}
