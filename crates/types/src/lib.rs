//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, so they can be
//! shared by the engine, the terminal view and the input mapping.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), the top-left cell of the 4x4 piece mask
//!
//! # Driver Timing Defaults
//!
//! The engine has no notion of time. These defaults are consumed by the driver that
//! calls `update()` at a fixed interval:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TICK_MS` | 300 | Interval between `update()` calls at start |
//! | `TICK_STEP_MS` | 1 | Interval reduction applied each time a piece locks |
//! | `MIN_TICK_MS` | 50 | Floor for the interval |
//!
//! # Examples
//!
//! ```
//! use tui_stage_types::{Key, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(2), PieceKind::T);
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//!
//! assert_eq!(Key::from_keysym("space"), Some(Key::ToggleDrop));
//! assert_eq!(Key::from_keysym("F1"), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square occupancy mask every piece is authored in
pub const MASK_SIZE: u8 = 4;

/// Column of the anchor of a freshly spawned piece
pub const SPAWN_X: i8 = 3;

/// Row of the anchor of a freshly spawned piece
pub const SPAWN_Y: i8 = 0;

/// Number of piece kinds in the catalog
pub const KIND_COUNT: usize = 7;

/// Number of rotation states per kind
pub const ROTATION_COUNT: usize = 4;

/// Tick interval the driver starts with (milliseconds)
pub const INITIAL_TICK_MS: u32 = 300;

/// Amount the driver shortens the tick interval by each time a piece locks
pub const TICK_STEP_MS: u32 = 1;

/// Lower bound for the tick interval
pub const MIN_TICK_MS: u32 = 50;

/// The seven canonical piece kinds
///
/// The discriminant order is the catalog order and the order random selection
/// indexes into.
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
    /// All kinds in catalog order
    pub const ALL: [PieceKind; KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index of this kind (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a catalog index, taken modulo the number of kinds
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % KIND_COUNT]
    }
}

/// Rotation states, indexed 0-3
///
/// - **North**: index 0
/// - **East**: index 1, one clockwise step
/// - **South**: index 2
/// - **West**: index 3
///
/// Indices are always taken modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All rotations in index order
    pub const ALL: [Rotation; ROTATION_COUNT] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotation index (0..4)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an index, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % ROTATION_COUNT]
    }

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tui_stage_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// State of a single board cell
///
/// - `Empty`: nothing here
/// - `Falling`: covered by the active piece; transient, redrawn every tick
/// - `Fixed`: permanently occupied by a piece that came to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Falling,
    Fixed,
}

impl CellState {
    pub fn is_fixed(self) -> bool {
        self == CellState::Fixed
    }

    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// Single-character form used in debug dumps and test fixtures
    pub fn as_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Falling => 'o',
            CellState::Fixed => '#',
        }
    }
}

/// Logical key symbols understood by the engine
///
/// Physical key bindings are the caller's concern; the engine only sees these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Flip whether the piece drifts down on each tick
    ToggleDrop,
    /// Rotate clockwise by one step
    Rotate,
    /// Move one column left
    MoveLeft,
    /// Move one column right
    MoveRight,
    /// Drift down until resting, in a single call
    HardDrop,
}

impl Key {
    pub const ALL: [Key; 5] = [
        Key::ToggleDrop,
        Key::Rotate,
        Key::MoveLeft,
        Key::MoveRight,
        Key::HardDrop,
    ];

    /// Parse a keysym name.
    ///
    /// Names are case-sensitive, the way windowing toolkits report them.
    /// Unknown names return `None` and are meant to be ignored by callers.
    pub fn from_keysym(s: &str) -> Option<Self> {
        match s {
            "space" => Some(Key::ToggleDrop),
            "w" => Some(Key::Rotate),
            "a" => Some(Key::MoveLeft),
            "d" => Some(Key::MoveRight),
            "s" => Some(Key::HardDrop),
            _ => None,
        }
    }

    /// Keysym name this key is bound to
    pub fn keysym(&self) -> &'static str {
        match self {
            Key::ToggleDrop => "space",
            Key::Rotate => "w",
            Key::MoveLeft => "a",
            Key::MoveRight => "d",
            Key::HardDrop => "s",
        }
    }
}
