//! Frontier registry: nodes that still have an unexplored side.

use super::store::TrackGraph;
use super::types::NodeId;

/// Set of frontier node ids, kept sorted ascending.
///
/// The registry is a pure derivative of the graph. It is rebuilt from
/// scratch by [`refresh`](Self::refresh) and never edited incrementally.
#[derive(Clone, Debug, Default)]
pub struct FrontierRegistry {
    members: Vec<NodeId>,
}

impl FrontierRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute membership from the current graph.
    pub fn refresh(&mut self, graph: &TrackGraph) {
        self.members.clear();
        self.members.extend(
            graph
                .nodes()
                .iter()
                .filter(|node| {
                    node.segments
                        .iter()
                        .filter_map(|id| graph.segment(*id).ok())
                        .any(|segment| !segment.is_resolved())
                })
                .map(|node| node.id),
        );
        // Arena order is id order, so members are already ascending.
        debug_assert!(self.members.windows(2).all(|w| w[0] < w[1]));
    }

    /// Is `node` a frontier member?
    pub fn is_frontier(&self, node: NodeId) -> bool {
        self.members.binary_search(&node).is_ok()
    }

    /// Members in ascending id order.
    pub fn all(&self) -> &[NodeId] {
        &self.members
    }

    /// No frontier left.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of frontier nodes.
    pub fn len(&self) -> usize {
        self.members.len()
    }
}
