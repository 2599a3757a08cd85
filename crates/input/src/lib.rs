//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the stage's logical [`crate::types::Key`]s.
//! The stage itself never sees physical keys.

pub mod map;

pub use tui_stage_types as types;

pub use map::{handle_key_event, should_quit};
