//! file: grid.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:44:30 Sunday
//! brief:

use super::{Tile, TileKind};

/// Row-major interleaved grid of `(2 * rows + 1) x (2 * cols + 1)` tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    height: usize,
    width: usize,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let height = 2 * rows + 1;
        let width = 2 * cols + 1;
        let tiles = (0..height)
            .flat_map(|i| (0..width).map(move |j| Tile::initial(TileKind::at(i, j))))
            .collect();
        Self {
            tiles,
            height,
            width,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.height && j < self.width
    }

    pub fn get(&self, i: usize, j: usize) -> Option<Tile> {
        self.idx(i, j).map(|idx| self.tiles[idx])
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut Tile> {
        self.idx(i, j).map(|idx| &mut self.tiles[idx])
    }

    /// Wraps a signed address onto the grid shape.
    pub fn wrap(&self, i: i32, j: i32) -> (usize, usize) {
        (
            i.rem_euclid(self.height as i32) as usize,
            j.rem_euclid(self.width as i32) as usize,
        )
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width)
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> Option<usize> {
        self.contains(i, j).then(|| i * self.width + j)
    }
}
