//! Nodes, segments and their stable identities.

use serde::Serialize;

use crate::core::{Direction, GridCoord};

/// Stable identifier of a decision point.
///
/// Ids are arena indices: assigned once at creation and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Position in the store's node arena.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Stable identifier of a directed segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SegmentId(pub u32);

impl SegmentId {
    /// Create a new segment ID.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Position in the store's segment arena.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SegmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Segment({})", self.0)
    }
}

/// A straight run leaving a node in one cardinal direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Unique identifier.
    pub id: SegmentId,
    /// Node that owns this segment. Never changes.
    pub origin: NodeId,
    /// Heading of the run. Never changes.
    pub direction: Direction,
    /// Length in grid cells; 0 until resolved.
    pub distance: u32,
    /// Node at the far end, `None` while undiscovered.
    pub target: Option<NodeId>,
}

impl Segment {
    /// Has the far end been discovered?
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// A decision point on the track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Cell of the decision point. Unique among nodes.
    pub location: GridCoord,
    /// Outgoing segments, at most one per direction.
    pub segments: Vec<SegmentId>,
}

impl Node {
    /// Number of outgoing segments.
    #[inline]
    pub fn degree(&self) -> usize {
        self.segments.len()
    }
}
