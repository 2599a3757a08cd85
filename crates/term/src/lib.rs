//! Terminal "game renderer" module.
//!
//! Renders stage snapshots into a small framebuffer that is flushed to the terminal
//! with crossterm. The view is pure and testable; only [`TerminalRenderer`] does I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_stage_core as core;
pub use tui_stage_types as types;

pub use fb::{Cell, FrameBuffer, Tone};
pub use game_view::{GameView, Viewport, MAX_CELL_W};
pub use renderer::{encode_into, TerminalRenderer};
