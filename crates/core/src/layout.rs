//! Layout module - immutable maze templates
//!
//! A layout is the compiled-in ASCII maze a session resets from. It is never
//! mutated; the working grid ([`crate::Maze`]) is a copy of it.

use crate::types::{Tile, MAZE_HEIGHT, MAZE_SIZE, MAZE_WIDTH};

/// The shipped maze. Border is solid wall, the start cell (1, 16) is floor,
/// and every pellet is reachable from the start.
const CLASSIC: [&str; MAZE_HEIGHT] = [
    "##################################################",
    "#................................................#",
    "#.###..####..####.......####..####....####..###..#",
    "#.###..####..####..##...####..####....####..###..#",
    "#..................##............................#",
    "#######..####......##....####.....#####...########",
    "#######..####..##..##....####.....#####...########",
    "#..............##...............................##",
    "#.####..######.##.#######..######..####..#######.#",
    "#.####..######.##.#######..######..####..#######.#",
    "#................................................#",
    "#..###..###..###.....#....####..####..####..###..#",
    "#..###..###..###.....#....####..####..####..###..#",
    "#######..####..###...#...........................#",
    "#######..####..###...#..####..######..###..#######",
    "#######..####..###...#..####..######..###..#######",
    "# ...............................................#",
    "#.....#..........................................#",
    "##################################################",
];

/// Immutable maze template, row-major (y * WIDTH + x)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    tiles: [Tile; MAZE_SIZE],
}

impl Layout {
    /// The built-in 19x50 maze
    pub fn classic() -> Self {
        Self::from_rows(&CLASSIC)
    }

    /// Build a layout from ASCII rows.
    ///
    /// `'#'` is wall, `'.'` is pellet, anything else is floor. Short rows and
    /// missing rows are padded with floor; extra columns and rows are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_core::Layout;
    /// use tui_pacman_core::types::Tile;
    ///
    /// let layout = Layout::from_rows(&["###", "#.#"]);
    /// assert_eq!(layout.get(0, 0), Some(Tile::Wall));
    /// assert_eq!(layout.get(1, 1), Some(Tile::Pellet));
    /// assert_eq!(layout.get(3, 0), Some(Tile::Empty));
    /// assert_eq!(layout.pellet_count(), 1);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let mut tiles = [Tile::Empty; MAZE_SIZE];
        for (y, row) in rows.iter().take(MAZE_HEIGHT).enumerate() {
            for (x, ch) in row.as_ref().chars().take(MAZE_WIDTH).enumerate() {
                tiles[y * MAZE_WIDTH + x] = Tile::from_glyph(ch);
            }
        }
        Self { tiles }
    }

    /// Layout with only a wall border and empty floor inside.
    pub fn bordered() -> Self {
        let mut tiles = [Tile::Empty; MAZE_SIZE];
        for y in 0..MAZE_HEIGHT {
            for x in 0..MAZE_WIDTH {
                if x == 0 || y == 0 || x == MAZE_WIDTH - 1 || y == MAZE_HEIGHT - 1 {
                    tiles[y * MAZE_WIDTH + x] = Tile::Wall;
                }
            }
        }
        Self { tiles }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if x >= MAZE_WIDTH || y >= MAZE_HEIGHT {
            return None;
        }
        Some(self.tiles[y * MAZE_WIDTH + x])
    }

    pub fn tiles(&self) -> &[Tile; MAZE_SIZE] {
        &self.tiles
    }

    pub fn pellet_count(&self) -> usize {
        self.tiles.iter().filter(|t| **t == Tile::Pellet).count()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::classic()
    }
}
