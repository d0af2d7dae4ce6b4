//! Arena-backed store of discovered nodes and segments.
//!
//! The store is append-only. Nodes and segments live in two vectors and are
//! addressed by [`NodeId`] / [`SegmentId`], which are plain indices into
//! those vectors. Nothing hands out references that outlive a call, so
//! appending can never invalidate what a caller holds.

use serde::Serialize;

use crate::core::{Direction, GridCoord, Openings};
use crate::error::GraphError;

use super::types::{Node, NodeId, Segment, SegmentId};

/// Maximum number of segments a node can own (one per direction).
pub const MAX_SEGMENTS_PER_NODE: usize = 4;

/// Topological map of the track: decision points and the runs between them.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TrackGraph {
    nodes: Vec<Node>,
    segments: Vec<Segment>,
}

impl TrackGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of segments created so far.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of segments whose target is known.
    pub fn resolved_segment_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_resolved()).count()
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All segments in creation order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes
            .get(id.index())
            .ok_or(GraphError::UnknownNode(id))
    }

    /// Look up a segment by id.
    pub fn segment(&self, id: SegmentId) -> Result<&Segment, GraphError> {
        self.segments
            .get(id.index())
            .ok_or(GraphError::UnknownSegment(id))
    }

    /// Read-only view of a node's outgoing segments.
    pub fn segments_of(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = &Segment> + '_, GraphError> {
        let node = self.node(node)?;
        Ok(node
            .segments
            .iter()
            .filter_map(|id| self.segments.get(id.index())))
    }

    /// Node located at `location`, if one was created there.
    ///
    /// Linear scan; track graphs stay small.
    pub fn find_node_by_location(&self, location: GridCoord) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|node| node.location == location)
            .map(|node| node.id)
    }

    /// Segment leaving `node` in `direction`, if any.
    pub fn segment_toward(
        &self,
        node: NodeId,
        direction: Direction,
    ) -> Result<Option<SegmentId>, GraphError> {
        Ok(self
            .segments_of(node)?
            .find(|segment| segment.direction == direction)
            .map(|segment| segment.id))
    }

    /// Does `node` still have a segment leading somewhere undiscovered?
    pub fn has_unresolved(&self, node: NodeId) -> Result<bool, GraphError> {
        Ok(self.segments_of(node)?.any(|segment| !segment.is_resolved()))
    }

    /// First unresolved segment of `node` in creation order.
    pub fn first_unresolved(&self, node: NodeId) -> Result<Option<&Segment>, GraphError> {
        Ok(self.segments_of(node)?.find(|segment| !segment.is_resolved()))
    }

    /// Create a decision point with one unresolved segment per opening.
    ///
    /// Segment directions are absolute: forward maps to `orientation`, left
    /// and right to the quarter turns of it. Segments are created in
    /// forward, left, right order.
    ///
    /// # Errors
    /// [`GraphError::DuplicateLocation`] if a node already sits at
    /// `location`. [`GraphError::ArenaFull`] once ids run out; nothing is
    /// added in that case.
    pub fn create_node(
        &mut self,
        location: GridCoord,
        orientation: Direction,
        openings: Openings,
    ) -> Result<NodeId, GraphError> {
        if let Some(existing) = self.find_node_by_location(location) {
            return Err(GraphError::DuplicateLocation { location, existing });
        }

        let id = NodeId::new(next_index(self.nodes.len(), "node")?);
        next_index(self.segments.len() + openings.count(), "segment")?;
        self.nodes.push(Node {
            id,
            location,
            segments: Vec::with_capacity(MAX_SEGMENTS_PER_NODE),
        });

        for direction in openings.directions(orientation) {
            self.push_segment(id, direction)?;
        }

        log::debug!(
            "Created {} at {} with {} open side(s)",
            id,
            location,
            openings.count()
        );
        Ok(id)
    }

    /// Record that `a` and `b` are joined by a straight run.
    ///
    /// Resolves (or creates) the segment from `a` towards `b` and the
    /// reciprocal one from `b` towards `a`, both with the Manhattan distance
    /// between the two cells. Calling it again with the same pair changes
    /// nothing.
    ///
    /// # Errors
    /// [`GraphError::NonAxisAligned`] if the cells do not share a row or
    /// column (or are the same cell). [`GraphError::UnknownNode`] for ids the
    /// store never issued.
    pub fn link_nodes(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        let from = self.node(a)?.location;
        let to = self.node(b)?.location;

        let direction =
            Direction::between(from, to).ok_or(GraphError::NonAxisAligned { from, to })?;
        let distance = from.manhattan_distance(&to);
        // Room for both sides, so a link never lands half-way.
        next_index(self.segments.len() + 2, "segment")?;

        self.resolve_toward(a, direction, b, distance)?;
        self.resolve_toward(b, direction.opposite(), a, distance)?;

        log::debug!(
            "Linked {} {} -> {} {} ({} {}, distance {})",
            a,
            from,
            b,
            to,
            direction,
            direction.opposite(),
            distance
        );
        Ok(())
    }

    /// Update-or-append the segment leaving `origin` in `direction`.
    fn resolve_toward(
        &mut self,
        origin: NodeId,
        direction: Direction,
        target: NodeId,
        distance: u32,
    ) -> Result<(), GraphError> {
        let id = match self.segment_toward(origin, direction)? {
            Some(id) => id,
            None => self.push_segment(origin, direction)?,
        };

        let segment = &mut self.segments[id.index()];
        if let Some(previous) = segment.target
            && previous != target
        {
            log::warn!(
                "{} retargeted from {} to {} while linking",
                id,
                previous,
                target
            );
        }
        segment.target = Some(target);
        segment.distance = distance;
        Ok(())
    }

    /// Append a fresh unresolved segment to `origin`.
    fn push_segment(
        &mut self,
        origin: NodeId,
        direction: Direction,
    ) -> Result<SegmentId, GraphError> {
        let id = SegmentId::new(next_index(self.segments.len(), "segment")?);
        self.segments.push(Segment {
            id,
            origin,
            direction,
            distance: 0,
            target: None,
        });
        self.nodes[origin.index()].segments.push(id);
        Ok(id)
    }

    /// Display adapter printing a node together with its segments.
    pub fn display_node(&self, id: NodeId) -> Result<NodeDisplay<'_>, GraphError> {
        Ok(NodeDisplay {
            graph: self,
            node: self.node(id)?,
        })
    }
}

/// Arena index for a new entry; ids never wrap.
fn next_index(len: usize, arena: &'static str) -> Result<u32, GraphError> {
    u32::try_from(len).map_err(|_| GraphError::ArenaFull(arena))
}

/// Human-readable dump of one node, see [`TrackGraph::display_node`].
pub struct NodeDisplay<'a> {
    graph: &'a TrackGraph,
    node: &'a Node,
}

impl std::fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {} with {} segment(s)",
            self.node.id,
            self.node.location,
            self.node.degree()
        )?;
        for segment in self
            .node
            .segments
            .iter()
            .filter_map(|id| self.graph.segments.get(id.index()))
        {
            match segment.target {
                Some(target) => write!(
                    f,
                    "\n  {} {} -> {} ({} cells)",
                    segment.id, segment.direction, target, segment.distance
                )?,
                None => write!(
                    f,
                    "\n  {} {} -> unexplored",
                    segment.id, segment.direction
                )?,
            }
        }
        Ok(())
    }
}
