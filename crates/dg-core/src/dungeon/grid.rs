//! Sparse row-major grids
//!
//! The floor, wall, occupant and drop layers all share this shape: a
//! `height × width` array of optional cells indexed `[y][x]`.

use serde::{Deserialize, Serialize};

/// A `width × height` layer where every cell is empty or holds one `T`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid<T> {
    width: i32,
    height: i32,
    cells: Vec<Option<T>>,
}

impl<T: Copy> TileGrid<T> {
    /// Create an empty grid
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) as usize) * (height.max(0) as usize);
        Self {
            width: width.max(0),
            height: height.max(0),
            cells: vec![None; len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Cell contents; out-of-bounds reads are empty
    pub fn get(&self, x: i32, y: i32) -> Option<T> {
        self.index(x, y).and_then(|i| self.cells[i])
    }

    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_none()
    }

    /// Write a cell, returning false when `(x, y)` is outside the grid
    pub fn set(&mut self, x: i32, y: i32, value: Option<T>) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Occupied cells, row by row
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, T)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|v| (i as i32 % width, i as i32 / width, v)))
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
