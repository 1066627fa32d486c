//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Maze Dimensions
//!
//! The maze is a fixed 50x19 grid:
//!
//! - **Width**: 50 columns (indexed 0-49)
//! - **Height**: 19 rows (indexed 0-18)
//! - **Start position**: (1, 16)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `MOVE_INTERVAL_MS` | 80 | Time between player steps (5 frames) |
//! | `MS_PER_SECOND` | 1000 | Countdown granularity |
//!
//! # Difficulty Countdowns
//!
//! | Difficulty | Button | Seconds |
//! |------------|--------|---------|
//! | Easy | A | 240 |
//! | Medium | B | 150 |
//! | Hard | X | 120 |
//!
//! # Examples
//!
//! ```
//! use tui_pacman_types::{Button, Difficulty, Direction, Tile, MAZE_HEIGHT, MAZE_WIDTH};
//!
//! assert_eq!(Tile::from_glyph('#'), Tile::Wall);
//! assert_eq!(Tile::Pellet.glyph(), '.');
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! assert_eq!(Difficulty::from_button(Button::B), Some(Difficulty::Medium));
//! assert_eq!(Difficulty::Hard.countdown_secs(), 120);
//!
//! assert_eq!(MAZE_WIDTH, 50);
//! assert_eq!(MAZE_HEIGHT, 19);
//! ```

/// Maze width in cells (50 columns)
pub const MAZE_WIDTH: usize = 50;

/// Maze height in cells (19 rows)
pub const MAZE_HEIGHT: usize = 19;

/// Total number of cells in the maze
pub const MAZE_SIZE: usize = MAZE_WIDTH * MAZE_HEIGHT;

/// Player start column
pub const START_X: i16 = 1;

/// Player start row
pub const START_Y: i16 = 16;

/// Points awarded for each pellet eaten
pub const PELLET_SCORE: u32 = 10;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default time between player steps: five frames.
pub const MOVE_INTERVAL_MS: u32 = 5 * TICK_MS;

/// Milliseconds per countdown second
pub const MS_PER_SECOND: u32 = 1000;

/// Glyph drawn at the player's cell
pub const PLAYER_GLYPH: char = 'P';


/// A single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    Wall,
    Pellet,
    #[default]
    Empty,
}

impl Tile {
    /// Parse a tile from its ASCII maze glyph.
    ///
    /// `'#'` is a wall, `'.'` a pellet, and every other character is empty floor.
    pub fn from_glyph(ch: char) -> Self {
        match ch {
            '#' => Tile::Wall,
            '.' => Tile::Pellet,
            _ => Tile::Empty,
        }
    }

    /// Display glyph for this tile
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Pellet => '.',
            Tile::Empty => ' ',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }
}

/// Player facing direction
///
/// `None` means no direction has been requested yet; stepping is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// The four movable directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector (dx, dy); rows grow downward
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }
}

/// Countdown difficulty, chosen once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Seconds on the clock for this difficulty
    pub fn countdown_secs(&self) -> u32 {
        match self {
            Difficulty::Easy => 240,
            Difficulty::Medium => 150,
            Difficulty::Hard => 120,
        }
    }

    /// Difficulty selected by a face button on the difficulty prompt.
    ///
    /// Returns `None` for any button that does not choose a difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_types::{Button, Difficulty};
    ///
    /// assert_eq!(Difficulty::from_button(Button::A), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_button(Button::X), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_button(Button::Left), None);
    /// ```
    pub fn from_button(button: Button) -> Option<Self> {
        match button {
            Button::A => Some(Difficulty::Easy),
            Button::B => Some(Difficulty::Medium),
            Button::X => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Discrete buttons fed into a session once per frame
///
/// Buttons are edge-triggered: one entry per press, not per frame held.
/// Their meaning depends on the session status (A starts, picks Easy,
/// resumes, or restarts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    /// Confirm: start, Easy, resume, restart
    A,
    /// Medium difficulty
    B,
    /// Hard difficulty
    X,
    /// Pause toggle
    Select,
}

impl Button {
    /// Direction carried by a d-pad button
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Button::Up => Some(Direction::Up),
            Button::Down => Some(Direction::Down),
            Button::Left => Some(Direction::Left),
            Button::Right => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
            Button::A => "a",
            Button::B => "b",
            Button::X => "x",
            Button::Select => "select",
        }
    }
}

/// Session lifecycle
///
/// Idle → AwaitingDifficulty → Running → Ended → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    AwaitingDifficulty,
    Running,
    Ended,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    TimeExpired,
    AllPelletsCollected,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::TimeExpired => "time_expired",
            Outcome::AllPelletsCollected => "all_pellets_collected",
        }
    }
}

/// Core-side event recorded by a session transition.
///
/// Drained by the frame loop for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    DifficultySelected(Difficulty),
    Paused,
    Resumed,
    Ended { outcome: Outcome, score: u32 },
    Restarted,
}
