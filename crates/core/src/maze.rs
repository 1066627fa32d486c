//! Maze module - the mutable working grid
//!
//! The maze is a 50x19 grid of walls, pellets and floor.
//! Uses a flat array for cache locality and zero-allocation copies from a layout.
//! Coordinates: (x, y) where x ranges 0..49 (left to right), y ranges 0..18 (top to bottom)

use crate::layout::Layout;
use crate::types::{Tile, MAZE_HEIGHT, MAZE_SIZE, MAZE_WIDTH};

/// The working grid - 50 columns x 19 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Maze {
    /// Flat array of tiles, row-major order (y * WIDTH + x)
    tiles: [Tile; MAZE_SIZE],
}

impl Maze {
    /// Create a maze as a copy of `layout`
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            tiles: *layout.tiles(),
        }
    }

    /// Overwrite every tile with the layout's
    pub fn load(&mut self, layout: &Layout) {
        self.tiles.copy_from_slice(layout.tiles());
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= MAZE_WIDTH as i16 || y < 0 || y >= MAZE_HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * MAZE_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        MAZE_WIDTH
    }

    pub fn height(&self) -> usize {
        MAZE_HEIGHT
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Tile> {
        Self::index(x, y).map(|idx| self.tiles[idx])
    }

    /// Set tile at position (x, y)
    /// Returns false if out of bounds
    #[cfg(test)]
    fn set(&mut self, x: i16, y: i16, tile: Tile) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Check if the player may stand at (x, y): in bounds and not a wall
    pub fn is_walkable(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(t) if !t.is_wall())
    }

    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        Self::index(x, y).is_none()
    }

    /// Eat the pellet at (x, y) if there is one.
    /// Returns true if a pellet was removed.
    pub fn take_pellet(&mut self, x: i16, y: i16) -> bool {
        match Self::index(x, y) {
            Some(idx) if self.tiles[idx] == Tile::Pellet => {
                self.tiles[idx] = Tile::Empty;
                true
            }
            _ => false,
        }
    }

    pub fn pellet_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Pellet).count()
    }

    pub fn has_pellets(&self) -> bool {
        self.tiles.contains(&Tile::Pellet)
    }

    /// One row of tiles, or None past the last row
    pub fn row(&self, y: usize) -> Option<&[Tile]> {
        if y >= MAZE_HEIGHT {
            return None;
        }
        let start = y * MAZE_WIDTH;
        Some(&self.tiles[start..start + MAZE_WIDTH])
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Check that the grid is an exact copy of `layout`
    pub fn matches(&self, layout: &Layout) -> bool {
        self.tiles == *layout.tiles()
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::from_layout(&Layout::classic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_index_calculation() {
        assert_eq!(Maze::index(0, 0), Some(0));
        assert_eq!(Maze::index(49, 0), Some(49));
        assert_eq!(Maze::index(0, 1), Some(50));
        assert_eq!(Maze::index(49, 18), Some(949));
        assert_eq!(Maze::index(-1, 0), None);
        assert_eq!(Maze::index(50, 0), None);
        assert_eq!(Maze::index(0, 19), None);
    }

    #[test]
    fn test_take_pellet_only_once() {
        let mut maze = Maze::from_layout(&Layout::from_rows(&["#.#"]));
        assert!(maze.take_pellet(1, 0));
        assert_eq!(maze.get(1, 0), Some(Tile::Empty));
        assert!(!maze.take_pellet(1, 0));
        assert!(!maze.take_pellet(0, 0));
        assert_eq!(maze.get(0, 0), Some(Tile::Wall));
    }

    #[test]
    fn test_load_restores_layout() {
        let layout = Layout::classic();
        let mut maze = Maze::from_layout(&layout);
        maze.set(2, 16, Tile::Empty);
        maze.set(5, 5, Tile::Pellet);
        assert!(!maze.matches(&layout));

        maze.load(&layout);
        assert!(maze.matches(&layout));
    }

    #[test]
    fn test_row_slices() {
        let maze = Maze::default();
        assert_eq!(maze.row(0).map(|r| r.len()), Some(MAZE_WIDTH));
        assert!(maze.row(0).unwrap().iter().all(|t| t.is_wall()));
        assert!(maze.row(MAZE_HEIGHT).is_none());
    }
}
