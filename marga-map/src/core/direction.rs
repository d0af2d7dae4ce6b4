//! Cardinal directions on the track grid.
//!
//! Directions are numbered clockwise from North so that turning is plain
//! modular arithmetic:
//!
//! ```text
//!            North (0)
//!               ^
//!   West (3) <     > East (1)
//!               v
//!            South (2)
//! ```

use serde::{Deserialize, Serialize};

use super::point::GridCoord;

/// One of the four grid headings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Towards decreasing row index.
    North = 0,
    /// Towards increasing column index.
    East = 1,
    /// Towards increasing row index.
    South = 2,
    /// Towards decreasing column index.
    West = 3,
}

impl Direction {
    /// All directions in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Convert from the clockwise index (taken modulo 4).
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    /// Clockwise index of this direction.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Heading after a half turn.
    #[inline]
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Heading after a quarter turn counter-clockwise.
    #[inline]
    pub fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Heading after a quarter turn clockwise.
    #[inline]
    pub fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// One-cell step in this direction (rows grow towards South).
    #[inline]
    pub fn unit_offset(self) -> GridCoord {
        match self {
            Direction::North => GridCoord::new(0, -1),
            Direction::East => GridCoord::new(1, 0),
            Direction::South => GridCoord::new(0, 1),
            Direction::West => GridCoord::new(-1, 0),
        }
    }

    /// Axis-aligned heading from `from` to `to`.
    ///
    /// Returns `None` when the two cells coincide or do not share a row or
    /// column.
    pub fn between(from: GridCoord, to: GridCoord) -> Option<Self> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (0, 1) => Some(Direction::South),
            (0, -1) => Some(Direction::North),
            _ => None,
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }

    /// Arrow glyph used when drawing the vehicle on the grid.
    pub fn symbol(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
