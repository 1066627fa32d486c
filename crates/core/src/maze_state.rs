//! Maze state module - the grid and the player
//!
//! Owns the working maze and the player. Movement is one cell per [`MazeState::step`]
//! in the facing direction; a move into a wall or off the grid is ignored and the
//! facing is kept so the move is retried on the next step.

use std::iter::FusedIterator;

use crate::layout::Layout;
use crate::maze::Maze;
use crate::player::{Player, Position};
use crate::types::{Direction, Tile, MAZE_HEIGHT, MAZE_WIDTH, PELLET_SCORE, PLAYER_GLYPH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MazeState {
    maze: Maze,
    player: Player,
}

impl MazeState {
    pub fn new(layout: &Layout) -> Self {
        Self {
            maze: Maze::from_layout(layout),
            player: Player::new(),
        }
    }

    /// Copy `layout` into the grid and put the player back at the start
    /// with no score and no facing.
    pub fn reset(&mut self, layout: &Layout) {
        self.maze.load(layout);
        self.player = Player::new();
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn position(&self) -> Position {
        self.player.pos
    }

    pub fn direction(&self) -> Direction {
        self.player.direction
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn pellets_remaining(&self) -> usize {
        self.maze.pellet_count()
    }

    /// Teleport the player. Refused (returns false) for walls and off-grid cells.
    ///
    /// Does not eat a pellet under the new position. Not used by play, which
    /// only moves through [`MazeState::step`]; tests and benches use it to
    /// start from an arbitrary cell.
    pub fn place_player(&mut self, pos: Position) -> bool {
        if !self.maze.is_walkable(pos.x, pos.y) {
            return false;
        }
        self.player.pos = pos;
        true
    }

    /// Record the intended facing. Walls are checked at step time.
    pub fn request_direction(&mut self, dir: Direction) {
        self.player.direction = dir;
    }

    /// Try to move one cell in the facing direction.
    ///
    /// Returns true if the player moved. Arriving on a pellet eats it and
    /// scores [`PELLET_SCORE`]. The vacated cell is left as it was.
    pub fn step(&mut self) -> bool {
        if self.player.direction == Direction::None {
            return false;
        }

        let next = self.player.pos.offset(self.player.direction);
        if !self.maze.is_walkable(next.x, next.y) {
            return false;
        }

        self.player.pos = next;
        if self.maze.take_pellet(next.x, next.y) {
            self.player.score += PELLET_SCORE;
        }
        true
    }

    /// True when no pellet is left anywhere on the grid
    pub fn is_complete(&self) -> bool {
        !self.maze.has_pellets()
    }

    /// Row-by-row character view of the maze with the player drawn in.
    ///
    /// The iterator is lazy and cheap to clone. A clone resumes from the same
    /// row; call `render()` again to start over.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_core::{Layout, MazeState};
    ///
    /// let state = MazeState::new(&Layout::classic());
    /// let rows: Vec<String> = state.render().map(|row| row.collect()).collect();
    /// assert_eq!(rows.len(), 19);
    /// assert!(rows[16].starts_with("#P..."));
    /// ```
    pub fn render(&self) -> Rows<'_> {
        Rows {
            maze: &self.maze,
            player: self.player.pos,
            y: 0,
        }
    }
}

impl Default for MazeState {
    fn default() -> Self {
        Self::new(&Layout::classic())
    }
}

/// Iterator over rendered maze rows
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    maze: &'a Maze,
    player: Position,
    y: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let tiles = self.maze.row(self.y)?;
        let player_x = (self.player.y as usize == self.y && self.player.y >= 0)
            .then_some(self.player.x as usize);
        self.y += 1;
        Some(Row {
            tiles,
            player_x,
            x: 0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = MAZE_HEIGHT.saturating_sub(self.y);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Rows<'_> {}
impl FusedIterator for Rows<'_> {}

/// Iterator over the display characters of one row
#[derive(Debug, Clone)]
pub struct Row<'a> {
    tiles: &'a [Tile],
    player_x: Option<usize>,
    x: usize,
}

impl Iterator for Row<'_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let tile = self.tiles.get(self.x)?;
        let ch = if self.player_x == Some(self.x) {
            PLAYER_GLYPH
        } else {
            tile.glyph()
        };
        self.x += 1;
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = MAZE_WIDTH.min(self.tiles.len()).saturating_sub(self.x);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Row<'_> {}
impl FusedIterator for Row<'_> {}
