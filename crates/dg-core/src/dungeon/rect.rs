//! Rectangle primitive for rooms and corridors
//!
//! `x, y` is the top-left floor cell; `w, h` count floor cells. Room walls
//! extend two rows above `y` and one row below the floor, and the side walls
//! overlay the outermost floor columns.

use serde::{Deserialize, Serialize};

/// A room or corridor segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// One past the rightmost column
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Center cell, rounding toward the top-left
    pub const fn center(&self) -> (i32, i32) {
        (self.x + (self.w >> 1), self.y + (self.h >> 1))
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub const fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Grow by `n` cells on every side
    pub const fn expand(&self, n: i32) -> Rect {
        Rect::new(self.x - n, self.y - n, self.w + 2 * n, self.h + 2 * n)
    }

    /// Whether `other` lies entirely inside this rectangle
    pub const fn encloses(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Cells covered by a room once its walls are drawn
    pub const fn room_bounds(&self) -> Rect {
        Rect::new(self.x, self.y - 2, self.w, self.h + 3)
    }

    /// Cells covered by a horizontal corridor and its wall runs
    pub const fn corridor_h_bounds(&self) -> Rect {
        Rect::new(self.x, self.y - 2, self.w, self.h + 3)
    }

    /// Cells covered by a vertical corridor and its side walls
    pub const fn corridor_v_bounds(&self) -> Rect {
        Rect::new(self.x - 1, self.y, self.w + 2, self.h)
    }

    /// Floor cells no wall tile is drawn over
    ///
    /// Excludes the side-wall columns and the bottom wall row. A one-wide
    /// room keeps its single column.
    pub const fn interior(&self) -> Rect {
        if self.w <= 1 {
            Rect::new(self.x, self.y, self.w, self.h - 1)
        } else {
            Rect::new(self.x + 1, self.y, self.w - 2, self.h - 1)
        }
    }

    /// Iterate every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 6, 4);
        assert_eq!(r.right(), 16);
        assert_eq!(r.bottom(), 24);
        assert_eq!(r.center(), (13, 22));
    }

    #[test]
    fn test_center_rounds_down() {
        assert_eq!(Rect::new(0, 0, 7, 7).center(), (3, 3));
        assert_eq!(Rect::new(5, 5, 1, 1).center(), (5, 5));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0, 0, 3, 3);
        assert!(r.contains(0, 0));
        assert!(r.contains(2, 2));
        assert!(!r.contains(3, 0));
        assert!(!r.contains(-1, 1));
    }

    #[test]
    fn test_rect_intersects() {
        let r1 = Rect::new(0, 0, 10, 10);
        let r2 = Rect::new(5, 5, 10, 10);
        let r3 = Rect::new(10, 0, 4, 4);

        assert!(r1.intersects(&r2));
        assert!(r2.intersects(&r1));
        // touching edges do not intersect
        assert!(!r1.intersects(&r3));
        assert!(r1.expand(1).intersects(&r3));
        assert!(!r1.intersects(&Rect::new(2, 2, 0, 5)));
    }

    #[test]
    fn test_encloses() {
        let outer = Rect::new(0, 0, 20, 20);
        assert!(outer.encloses(&Rect::new(5, 5, 10, 10)));
        assert!(outer.encloses(&outer));
        assert!(!outer.encloses(&Rect::new(15, 15, 10, 2)));
    }

    #[test]
    fn test_interior() {
        assert_eq!(Rect::new(4, 4, 7, 5).interior(), Rect::new(5, 4, 5, 4));
        assert_eq!(Rect::new(4, 4, 1, 5).interior(), Rect::new(4, 4, 1, 4));
    }

    #[test]
    fn test_cells_row_major() {
        let cells: Vec<_> = Rect::new(1, 1, 2, 2).cells().collect();
        assert_eq!(cells, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }
}
