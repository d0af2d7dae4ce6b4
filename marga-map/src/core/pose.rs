//! Vehicle pose and local sensing snapshot.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::point::GridCoord;

/// Vehicle location and heading on the grid.
///
/// The pose belongs to the world collaborator. The core only holds the
/// latest value handed back by [`TrackWorld`](crate::world::TrackWorld)
/// calls and never edits it in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Cell the vehicle occupies.
    pub location: GridCoord,
    /// Heading the vehicle faces.
    pub orientation: Direction,
}

impl Pose {
    /// Create a new pose.
    #[inline]
    pub fn new(location: GridCoord, orientation: Direction) -> Self {
        Self {
            location,
            orientation,
        }
    }

    /// Same location, different heading.
    #[inline]
    pub fn facing(self, orientation: Direction) -> Self {
        Self {
            location: self.location,
            orientation,
        }
    }

    /// Cell one step ahead in `direction`.
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> GridCoord {
        self.location + direction.unit_offset()
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} facing {}", self.location, self.orientation)
    }
}

/// Openings reported by the three range sensors, relative to the heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Openings {
    /// Track continues straight ahead.
    pub forward: bool,
    /// Track continues to the left.
    pub left: bool,
    /// Track continues to the right.
    pub right: bool,
}

impl Openings {
    /// Create a new sensing snapshot.
    #[inline]
    pub fn new(forward: bool, left: bool, right: bool) -> Self {
        Self {
            forward,
            left,
            right,
        }
    }

    /// A cell is a decision point when any lateral opening exists.
    ///
    /// Plain corners count too, not only forks.
    #[inline]
    pub fn is_junction(&self) -> bool {
        self.left || self.right
    }

    /// Absolute directions of the open sides, in forward, left, right order.
    pub fn directions(&self, orientation: Direction) -> impl Iterator<Item = Direction> {
        [
            (self.forward, orientation),
            (self.left, orientation.turn_left()),
            (self.right, orientation.turn_right()),
        ]
        .into_iter()
        .filter_map(|(open, dir)| open.then_some(dir))
    }

    /// Number of open sides.
    pub fn count(&self) -> usize {
        [self.forward, self.left, self.right]
            .iter()
            .filter(|&&open| open)
            .count()
    }
}
