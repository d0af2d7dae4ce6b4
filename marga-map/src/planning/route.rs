//! Planned routes through the track graph.

use serde::Serialize;

use crate::graph::{NodeId, SegmentId};

/// Ordered sequence of resolved segments from `start` to `destination`.
///
/// A route whose start is already a frontier node has no segments and a
/// total distance of zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Node the route leaves from.
    pub start: NodeId,
    /// Frontier node the route ends at.
    pub destination: NodeId,
    /// Segments to traverse, in order.
    pub segments: Vec<SegmentId>,
    /// Sum of segment distances, in grid cells.
    pub total_distance: u32,
}

impl Route {
    /// Zero-length route that stays at `node`.
    pub fn stay(node: NodeId) -> Self {
        Self {
            start: node,
            destination: node,
            segments: Vec::new(),
            total_distance: 0,
        }
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for a zero-length route.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({} cells via",
            self.start, self.destination, self.total_distance
        )?;
        if self.segments.is_empty() {
            write!(f, " nothing")?;
        }
        for segment in &self.segments {
            write!(f, " {}", segment)?;
        }
        write!(f, ")")
    }
}
