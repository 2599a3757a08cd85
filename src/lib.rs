//! Terminal stage game (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the driver
//! configuration and tick state used by the `tui-stage` binary.

pub mod config;
pub mod driver;

pub use tui_stage_core as core;
pub use tui_stage_input as input;
pub use tui_stage_term as term;
pub use tui_stage_types as types;
