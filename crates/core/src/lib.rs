//! Stage engine - the logic core of a falling-block puzzle
//!
//! This crate contains the playing field, the single active piece and the rules that
//! move, fix and clear them. It has **zero dependencies** on UI, timing, or I/O:
//!
//! - **Deterministic**: pieces come from an injected [`RandomSource`]
//! - **Synchronous**: every call finishes within bounded work; the caller owns the clock
//! - **Total**: no operation fails; game over is a state, not an error
//!
//! # Module Structure
//!
//! - [`catalog`]: 4x4 occupancy masks for the seven kinds and four rotations
//! - [`geometry`]: bounds test and the one-row-down collision probes
//! - [`board`]: 10x20 grid of `Empty` / `Falling` / `Fixed` cells with line clearing
//! - [`rng`]: the random source capability, a seeded LCG and a scripted source
//! - [`stage`]: the engine itself (`update`, `input`, collisions, shadow, game over)
//! - [`snapshot`]: copyable view of a stage for renderers
//!
//! # Rules
//!
//! - A new piece gets a random kind and a random rotation at anchor (3, 0)
//! - Each tick the piece drifts one row unless drifting is toggled off
//! - A piece resting on the floor or a fixed cell is fixed on the next tick
//! - Rows made entirely of fixed cells are removed and the rest compacts downward
//! - Rotation is clockwise only and has no wall kicks
//! - The game ends when a spawned piece overlaps fixed cells
//!
//! # Example
//!
//! ```
//! use tui_stage_core::{Stage, ScriptedSource};
//! use tui_stage_types::{Key, PieceKind, Rotation, BOARD_HEIGHT};
//!
//! let mut stage = Stage::new(ScriptedSource::pieces(&[(PieceKind::O, Rotation::North)]));
//!
//! // The O piece is two rows tall, so it comes to rest two rows above the floor.
//! assert_eq!(stage.shadow_position(), BOARD_HEIGHT as i8 - 2);
//!
//! stage.input(Key::HardDrop);
//! stage.update();
//! assert!(stage.is_fix());
//! assert!(!stage.is_end());
//! ```

pub mod board;
pub mod catalog;
pub mod geometry;
pub mod rng;
pub mod snapshot;
pub mod stage;

pub use tui_stage_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineMarks};
pub use catalog::{get_cell, get_mask, get_shape, piece_height, piece_width, Mask, PieceShape};
pub use geometry::{is_out_of_stage, Probe};
pub use rng::{RandomSource, ScriptedSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, StageSnapshot};
pub use stage::{Piece, Stage};
