//! The player: position, facing and score.

use crate::types::{Direction, START_X, START_Y};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The fixed start coordinate (1, 16)
    pub const fn start() -> Self {
        Self::new(START_X, START_Y)
    }

    /// Neighbor one cell away in `dir` (unchecked; may be out of bounds)
    pub fn offset(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub pos: Position,
    pub direction: Direction,
    pub score: u32,
}

impl Player {
    /// Fresh player at the start coordinate, facing nowhere
    pub fn new() -> Self {
        Self {
            pos: Position::start(),
            direction: Direction::None,
            score: 0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
