//! TUI Pac-Man (workspace facade crate).
//!
//! This package exposes `tui_pacman::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the runtime
//! [`config`] read by the binary.

pub mod config;

pub use tui_pacman_core as core;
pub use tui_pacman_input as input;
pub use tui_pacman_term as term;
pub use tui_pacman_types as types;
