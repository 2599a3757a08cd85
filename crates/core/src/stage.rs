//! Stage module - the board engine
//!
//! Owns the grid and the single active piece, and advances both one tick at a time.
//!
//! Per-piece lifecycle:
//!
//! ```text
//! Spawned -> (drift / move / rotate)* -> Resting -> Fixed into board -> next Spawned
//! ```
//!
//! A piece is resting when [`Stage::is_collision_bottom`] holds. The next
//! [`Stage::update`] burns it into the grid, clears full rows and spawns the next piece.
//! [`Stage::is_end`] turns true when a freshly spawned piece overlaps the stack; the
//! driver is expected to stop calling `update()` from then on.

use crate::board::Board;
use crate::catalog::{get_shape, PieceShape};
use crate::geometry::{is_out_of_stage, place, Probe};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::StageSnapshot;
use crate::types::{CellState, Key, PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// The active piece: kind, rotation and the anchor of its mask's top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Create a piece at an explicit anchor
    pub fn at(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Occupied mask cells for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Board cells covered at the current anchor, including off-board ones
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        place(self.shape(), self.x, self.y)
    }
}

/// The board engine.
///
/// Single-threaded and synchronous: every call runs to completion and the engine
/// assumes exclusive access from one driver.
#[derive(Debug, Clone)]
pub struct Stage<R = SimpleRng> {
    board: Board,
    active: Piece,
    can_drop: bool,
    is_fix: bool,
    locked_pieces: u32,
    cleared_lines: u32,
    rng: R,
}

impl Stage<SimpleRng> {
    /// Stage drawing pieces from a seeded [`SimpleRng`]
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Stage<R> {
    /// Create an empty stage and spawn the first piece from `rng`
    pub fn new(mut rng: R) -> Self {
        let (kind, rotation) = rng.next_piece();
        let mut stage = Self {
            board: Board::new(),
            active: Piece::new(kind, rotation),
            can_drop: true,
            is_fix: false,
            locked_pieces: 0,
            cleared_lines: 0,
            rng,
        };
        stage.merge_active();
        stage
    }

    /// Advance the simulation by one tick.
    ///
    /// A piece that is not resting drifts one row (when drop is enabled). A resting
    /// piece is fixed into the grid, full rows are removed and a new piece spawns.
    pub fn update(&mut self) {
        self.merge_active();

        if !self.is_collision_bottom() {
            self.is_fix = false;
            if self.can_drop {
                self.drop_active();
            }
        } else {
            self.is_fix = true;
            self.fix_active();
            let marks = self.board.line_marks();
            let removed = self.board.remove_lines(&marks);
            self.cleared_lines += removed.len() as u32;
            self.locked_pieces += 1;
            self.spawn();
        }

        self.merge_active();
    }

    /// Apply one logical key press.
    pub fn input(&mut self, key: Key) {
        match key {
            Key::ToggleDrop => self.can_drop = !self.can_drop,
            Key::Rotate => {
                self.rotate();
            }
            Key::MoveLeft => {
                if !self.is_collision_left() {
                    self.active.x -= 1;
                }
            }
            Key::MoveRight => {
                if !self.is_collision_right() {
                    self.active.x += 1;
                }
            }
            Key::HardDrop => self.hard_drop(),
        }
        self.merge_active();
    }

    /// Apply a key press given by keysym name; unknown names are ignored.
    pub fn input_keysym(&mut self, keysym: &str) {
        if let Some(key) = Key::from_keysym(keysym) {
            self.input(key);
        }
    }

    /// Rotate clockwise by one step if the next mask fits at the current anchor.
    ///
    /// Returns whether the rotation happened. No kicks are attempted.
    pub fn rotate(&mut self) -> bool {
        if !self.can_rotate() {
            return false;
        }
        self.active.rotation = self.active.rotation.rotate_cw();
        true
    }

    /// Whether the next clockwise mask lies on the board and off every `Fixed` cell
    pub fn can_rotate(&self) -> bool {
        let next = get_shape(self.active.kind, self.active.rotation.rotate_cw());
        place(next, self.active.x, self.active.y)
            .all(|(x, y)| !is_out_of_stage(x, y) && !self.board.is_fixed(x, y))
    }

    /// Drift the piece down until it rests, within this call.
    pub fn hard_drop(&mut self) {
        while !self.is_collision_bottom() {
            self.drop_active();
        }
    }

    /// Whether the piece is resting at its current anchor
    pub fn is_collision_bottom(&self) -> bool {
        self.is_collision_bottom_at(self.active.x, self.active.y)
    }

    /// Whether the piece would be resting if anchored at (x, y)
    pub fn is_collision_bottom_at(&self, x: i8, y: i8) -> bool {
        self.collides(Probe::Bottom, x, y)
    }

    /// Whether a move left is blocked at the current anchor
    pub fn is_collision_left(&self) -> bool {
        self.is_collision_left_at(self.active.x, self.active.y)
    }

    /// Whether a move left is blocked if anchored at (x, y).
    ///
    /// Probes one column left and one row down of every occupied cell.
    pub fn is_collision_left_at(&self, x: i8, y: i8) -> bool {
        self.collides(Probe::Left, x, y)
    }

    /// Whether a move right is blocked at the current anchor
    pub fn is_collision_right(&self) -> bool {
        self.is_collision_right_at(self.active.x, self.active.y)
    }

    /// Whether a move right is blocked if anchored at (x, y).
    ///
    /// Probes one column right and one row down of every occupied cell.
    pub fn is_collision_right_at(&self, x: i8, y: i8) -> bool {
        self.collides(Probe::Right, x, y)
    }

    /// Row the piece would come to rest on, without moving it
    pub fn shadow_position(&self) -> i8 {
        let x = self.active.x;
        let mut y = self.active.y;
        while !self.is_collision_bottom_at(x, y) {
            y += 1;
        }
        y
    }

    /// Game over: some on-board cell of the active piece is already `Fixed`
    pub fn is_end(&self) -> bool {
        self.active.cells().any(|(x, y)| self.board.is_fixed(x, y))
    }

    /// True when the last `update()` fixed a piece into the board
    pub fn is_fix(&self) -> bool {
        self.is_fix
    }

    /// Whether the piece drifts down on each tick
    pub fn can_drop(&self) -> bool {
        self.can_drop
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for scripted setups.
    ///
    /// `Falling` marks written here are replaced on the next overlay refresh.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Cell state at (x, y), `None` off the board
    pub fn cell(&self, x: i8, y: i8) -> Option<CellState> {
        self.board.get(x, y)
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn rotation(&self) -> Rotation {
        self.active.rotation
    }

    /// Replace the active piece and redraw the overlay
    pub fn set_active(&mut self, piece: Piece) {
        self.active = piece;
        self.merge_active();
    }

    /// Pieces fixed into the board so far
    pub fn locked_pieces(&self) -> u32 {
        self.locked_pieces
    }

    /// Rows cleared so far
    pub fn cleared_lines(&self) -> u32 {
        self.cleared_lines
    }

    /// Capture a copy of everything a renderer needs
    pub fn snapshot(&self) -> StageSnapshot {
        let mut snap = StageSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, out: &mut StageSnapshot) {
        out.board = self.board.to_rows();
        out.active = self.active.into();
        out.shadow_y = self.shadow_position();
        out.can_drop = self.can_drop;
        out.is_fix = self.is_fix;
        out.is_end = self.is_end();
        out.locked_pieces = self.locked_pieces;
        out.cleared_lines = self.cleared_lines;
    }

    fn collides(&self, probe: Probe, x: i8, y: i8) -> bool {
        let (dx, dy) = probe.offset();
        place(self.active.shape(), x, y).any(|(cx, cy)| {
            let px = cx.saturating_add(dx);
            let py = cy.saturating_add(dy);
            is_out_of_stage(px, py) || self.board.is_fixed(px, py)
        })
    }

    fn drop_active(&mut self) {
        self.active.y += 1;
    }

    /// Clear last tick's `Falling` marks and redraw them for the active piece.
    /// Off-board and `Fixed` cells are left alone.
    fn merge_active(&mut self) {
        self.board.clear_falling();
        for (x, y) in self.active.cells() {
            if self.board.get(x, y) == Some(CellState::Empty) {
                self.board.set(x, y, CellState::Falling);
            }
        }
    }

    fn fix_active(&mut self) {
        for (x, y) in self.active.cells() {
            self.board.set(x, y, CellState::Fixed);
        }
    }

    fn spawn(&mut self) {
        let (kind, rotation) = self.rng.next_piece();
        self.active = Piece::new(kind, rotation);
    }
}
