//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Button`] presses and batches
//! them per frame, so the session sees edge-triggered input even on terminals
//! that emit auto-repeat.

pub mod frame;
pub mod map;

pub use tui_pacman_types as types;

pub use frame::{FrameInput, FRAME_CAPACITY};
pub use map::{handle_key_event, should_quit};
