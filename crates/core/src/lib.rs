//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze rules, state management, and session lifecycle.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same inputs and elapsed times produce identical games
//! - **Testable**: Every rule is reachable from plain method calls
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`layout`]: Immutable 50x19 maze templates built from ASCII rows
//! - [`maze`]: The mutable working grid of walls, pellets and floor
//! - [`player`]: Player position, facing and score
//! - [`maze_state`]: Grid + player; movement, scoring, completion, text rendering
//! - [`countdown`]: Whole-second countdown fed by millisecond deltas
//! - [`session`]: Start prompt, difficulty, countdown, pause and end of a game
//!
//! # Game Rules
//!
//! - One step moves the player one cell in the facing direction
//! - Walls and the grid edge block movement; the facing is kept and retried
//! - Each pellet eaten scores 10
//! - A session ends when the clock runs out or the last pellet is eaten
//!
//! # Example
//!
//! ```
//! use tui_pacman_core::Session;
//! use tui_pacman_types::{Button, SessionStatus};
//!
//! let mut session = Session::default();
//! session.press(Button::A); // start
//! session.press(Button::X); // hard: 120 seconds
//! session.press(Button::Right);
//!
//! assert!(session.step());
//! assert_eq!(session.score(), 10);
//! assert_eq!(session.status(), SessionStatus::Running);
//! ```
//!
//! # Timing
//!
//! The frame loop calls [`Session::update`](session::Session::update) every
//! 16ms with the elapsed time. The countdown consumes whole seconds; the
//! player steps once per movement interval (80ms by default).

pub mod countdown;
pub mod layout;
pub mod maze;
pub mod maze_state;
pub mod player;
pub mod session;

pub use tui_pacman_types as types;

// Re-export commonly used types for convenience
pub use countdown::Countdown;
pub use layout::Layout;
pub use maze::Maze;
pub use maze_state::{MazeState, Row, Rows};
pub use player::{Player, Position};
pub use session::{Session, SessionConfig, EVENT_CAPACITY};
