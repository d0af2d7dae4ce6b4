//! Integer grid coordinates.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid cell coordinates (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index, grows East)
    pub x: i32,
    /// Y coordinate (row index, grows South)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance (L1 norm) - travel cost on a 4-connected track
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when both cells share a row or a column.
    #[inline]
    pub fn is_axis_aligned_with(&self, other: &GridCoord) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(2, 1);
        let b = GridCoord::new(8, 1);
        assert_eq!(a.manhattan_distance(&b), 6);
        assert_eq!(b.manhattan_distance(&a), 6);
        assert_eq!(a.manhattan_distance(&GridCoord::new(-1, 5)), 7);
    }

    #[test]
    fn test_axis_alignment() {
        let a = GridCoord::new(3, 3);
        assert!(a.is_axis_aligned_with(&GridCoord::new(3, 9)));
        assert!(a.is_axis_aligned_with(&GridCoord::new(0, 3)));
        assert!(!a.is_axis_aligned_with(&GridCoord::new(4, 4)));
    }

    #[test]
    fn test_add_sub() {
        let a = GridCoord::new(5, 5);
        let step = GridCoord::new(0, -1);
        assert_eq!(a + step, GridCoord::new(5, 4));
        assert_eq!((a + step) - step, a);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridCoord::new(2, 7).to_string(), "(2, 7)");
    }
}
