use crate::stage::Piece;
use crate::types::{CellState, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of a stage, taken after `update()` or `input()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageSnapshot {
    pub board: [[CellState; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub shadow_y: i8,
    pub can_drop: bool,
    pub is_fix: bool,
    pub is_end: bool,
    pub locked_pieces: u32,
    pub cleared_lines: u32,
}

impl StageSnapshot {
    /// Count board cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.board.iter().flatten().filter(|&&c| c == state).count()
    }
}

impl Default for StageSnapshot {
    fn default() -> Self {
        Self {
            board: [[CellState::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot {
                kind: PieceKind::I,
                rotation: Rotation::North,
                x: SPAWN_X,
                y: SPAWN_Y,
            },
            shadow_y: SPAWN_Y,
            can_drop: true,
            is_fix: false,
            is_end: false,
            locked_pieces: 0,
            cleared_lines: 0,
        }
    }
}
