//! Dijkstra search for the closest frontier node.
//!
//! The search runs over resolved segments only and stops at the first
//! frontier node it settles. Queue entries carry an insertion counter so
//! that equal-cost candidates pop in the order they were discovered, which
//! keeps destination choice deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{ExploreError, Result};
use crate::graph::{FrontierRegistry, NodeId, SegmentId, TrackGraph};

use super::route::Route;

/// Priority queue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct QueueEntry {
    /// Distance from the start when the entry was pushed.
    cost: u32,
    /// Insertion order, breaks ties FIFO.
    seq: u64,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the shortest route from `start` to any frontier node.
///
/// Returns `Ok(None)` when no frontier node is reachable over resolved
/// segments. That is an expected outcome, not a failure.
///
/// # Errors
/// - [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode) if
///   `start` is not in the graph.
/// - [`ExploreError::RouteReconstructionInconsistent`] if the predecessor
///   chain of the accepted node does not lead back to `start`.
pub fn find_route_to_nearest_frontier(
    graph: &TrackGraph,
    frontier: &FrontierRegistry,
    start: NodeId,
) -> Result<Option<Route>> {
    search(graph, frontier, start, None)
}

/// Configured wrapper around [`find_route_to_nearest_frontier`].
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    max_expansions: Option<usize>,
}

impl RoutePlanner {
    /// Planner without an expansion limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give up after settling this many non-frontier nodes.
    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Configured expansion limit, if any.
    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Plan from `start` to the nearest frontier node.
    ///
    /// `Ok(None)` still means no frontier node is reachable. Running into
    /// the expansion limit is reported separately as
    /// [`ExploreError::SearchBudgetExhausted`].
    pub fn plan(
        &self,
        graph: &TrackGraph,
        frontier: &FrontierRegistry,
        start: NodeId,
    ) -> Result<Option<Route>> {
        let route = search(graph, frontier, start, self.max_expansions)?;
        match &route {
            Some(route) => log::debug!("Planned route {}", route),
            None => log::debug!(
                "No frontier reachable from {} ({} frontier node(s) known)",
                start,
                frontier.len()
            ),
        }
        Ok(route)
    }
}

fn search(
    graph: &TrackGraph,
    frontier: &FrontierRegistry,
    start: NodeId,
    max_expansions: Option<usize>,
) -> Result<Option<Route>> {
    // Validates the start id before anything else.
    graph.node(start)?;

    if frontier.is_frontier(start) {
        return Ok(Some(Route::stay(start)));
    }

    let n = graph.node_count();
    let mut dist: Vec<u32> = vec![u32::MAX; n];
    let mut via: Vec<Option<SegmentId>> = vec![None; n];
    dist[start.index()] = 0;

    let mut seq: u64 = 0;
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        cost: 0,
        seq,
        node: start,
    });

    let mut expansions = 0usize;

    while let Some(QueueEntry { cost, node, .. }) = heap.pop() {
        // Skip if we've found a better path
        if cost > dist[node.index()] {
            continue;
        }

        if frontier.is_frontier(node) {
            return reconstruct(graph, start, node, &via, cost).map(Some);
        }

        expansions += 1;
        if let Some(limit) = max_expansions
            && expansions > limit
        {
            log::warn!(
                "Route search from {} stopped after {} expansions",
                start,
                limit
            );
            return Err(ExploreError::SearchBudgetExhausted {
                start,
                expansions: limit,
            });
        }

        for segment in graph.segments_of(node)? {
            let Some(target) = segment.target else {
                continue;
            };
            let new_dist = cost.saturating_add(segment.distance);
            if new_dist < dist[target.index()] {
                dist[target.index()] = new_dist;
                via[target.index()] = Some(segment.id);
                seq += 1;
                heap.push(QueueEntry {
                    cost: new_dist,
                    seq,
                    node: target,
                });
            }
        }
    }

    Ok(None)
}

/// Walk predecessor segments back from `destination` to `start`.
fn reconstruct(
    graph: &TrackGraph,
    start: NodeId,
    destination: NodeId,
    via: &[Option<SegmentId>],
    total_distance: u32,
) -> Result<Route> {
    let inconsistent = |stalled_at| ExploreError::RouteReconstructionInconsistent {
        start,
        destination,
        stalled_at,
    };

    let mut segments = Vec::new();
    let mut current = destination;

    while current != start {
        // A chain longer than the node count must contain a cycle.
        if segments.len() >= graph.node_count() {
            return Err(inconsistent(current));
        }
        let segment_id = via
            .get(current.index())
            .copied()
            .flatten()
            .ok_or_else(|| inconsistent(current))?;
        let segment = graph.segment(segment_id)?;
        if segment.target != Some(current) {
            return Err(inconsistent(current));
        }
        segments.push(segment_id);
        current = segment.origin;
    }
    segments.reverse();

    Ok(Route {
        start,
        destination,
        segments,
        total_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, GridCoord, Openings};
    use crate::error::GraphError;

    fn node(graph: &mut TrackGraph, x: i32, y: i32, openings: Openings) -> NodeId {
        graph
            .create_node(GridCoord::new(x, y), Direction::North, openings)
            .unwrap()
    }

    fn closed() -> Openings {
        Openings::default()
    }

    fn route_distance(graph: &TrackGraph, route: &Route) -> u32 {
        route
            .segments
            .iter()
            .map(|id| graph.segment(*id).unwrap().distance)
            .sum()
    }

    #[test]
    fn test_unknown_start() {
        let graph = TrackGraph::new();
        let frontier = FrontierRegistry::new();
        let err =
            find_route_to_nearest_frontier(&graph, &frontier, NodeId::new(0)).unwrap_err();
        assert_eq!(
            err,
            ExploreError::Graph(GraphError::UnknownNode(NodeId::new(0)))
        );
    }

    #[test]
    fn test_start_on_frontier_is_zero_length() {
        let mut graph = TrackGraph::new();
        let a = node(&mut graph, 0, 0, Openings::new(true, false, false));
        let mut frontier = FrontierRegistry::new();
        frontier.refresh(&graph);

        let route = find_route_to_nearest_frontier(&graph, &frontier, a)
            .unwrap()
            .unwrap();
        assert_eq!(route, Route::stay(a));
    }

    #[test]
    fn test_prefers_shorter_distance_over_fewer_hops() {
        // a --10-- b(frontier)
        // |
        // 2
        // c --2-- d --2-- e(frontier)
        let mut graph = TrackGraph::new();
        let a = node(&mut graph, 0, 0, closed());
        let b = node(&mut graph, 10, 0, Openings::new(true, false, false));
        let c = node(&mut graph, 0, 2, closed());
        let d = node(&mut graph, 2, 2, closed());
        let e = node(&mut graph, 4, 2, Openings::new(true, false, false));
        graph.link_nodes(a, b).unwrap();
        graph.link_nodes(a, c).unwrap();
        graph.link_nodes(c, d).unwrap();
        graph.link_nodes(d, e).unwrap();

        let mut frontier = FrontierRegistry::new();
        frontier.refresh(&graph);
        assert_eq!(frontier.all(), &[b, e]);

        let route = find_route_to_nearest_frontier(&graph, &frontier, a)
            .unwrap()
            .unwrap();
        assert_eq!(route.destination, e);
        assert_eq!(route.total_distance, 6);
        assert_eq!(route.len(), 3);
        assert_eq!(route_distance(&graph, &route), route.total_distance);
    }

    #[test]
    fn test_route_is_connected_chain() {
        let mut graph = TrackGraph::new();
        let a = node(&mut graph, 0, 0, closed());
        let b = node(&mut graph, 0, 3, closed());
        let c = node(&mut graph, 5, 3, closed());
        let d = node(&mut graph, 5, 7, Openings::new(false, true, false));
        graph.link_nodes(a, b).unwrap();
        graph.link_nodes(b, c).unwrap();
        graph.link_nodes(c, d).unwrap();

        let mut frontier = FrontierRegistry::new();
        frontier.refresh(&graph);
        let route = find_route_to_nearest_frontier(&graph, &frontier, a)
            .unwrap()
            .unwrap();

        let mut at = a;
        for id in &route.segments {
            let segment = graph.segment(*id).unwrap();
            assert_eq!(segment.origin, at);
            at = segment.target.unwrap();
        }
        assert_eq!(at, d);
        assert_eq!(route.total_distance, 12);
    }

    #[test]
    fn test_equal_cost_tie_breaks_by_discovery_order() {
        // b(frontier)
        // |3
        // a --3-- d(frontier)
        let mut graph = TrackGraph::new();
        let a = graph
            .create_node(GridCoord::new(3, 3), Direction::North, closed())
            .unwrap();
        let b = node(&mut graph, 3, 0, Openings::new(true, false, false));
        let d = node(&mut graph, 6, 3, Openings::new(true, false, false));
        // Link East first so it is discovered first.
        graph.link_nodes(a, d).unwrap();
        graph.link_nodes(a, b).unwrap();

        let mut frontier = FrontierRegistry::new();
        frontier.refresh(&graph);
        let route = find_route_to_nearest_frontier(&graph, &frontier, a)
            .unwrap()
            .unwrap();
        assert_eq!(route.destination, d);
    }

    #[test]
    fn test_unreachable_frontier_returns_none() {
        let mut graph = TrackGraph::new();
        let a = node(&mut graph, 0, 0, closed());
        let b = node(&mut graph, 0, 4, closed());
        // Frontier node exists but is not connected.
        node(&mut graph, 9, 9, Openings::new(true, false, false));
        graph.link_nodes(a, b).unwrap();

        let mut frontier = FrontierRegistry::new();
        frontier.refresh(&graph);
        assert_eq!(frontier.len(), 1);
        assert!(
            find_route_to_nearest_frontier(&graph, &frontier, a)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_planner_expansion_limit() {
        let mut graph = TrackGraph::new();
        let a = node(&mut graph, 0, 0, closed());
        let b = node(&mut graph, 0, 2, closed());
        let c = node(&mut graph, 0, 4, Openings::new(false, true, false));
        graph.link_nodes(a, b).unwrap();
        graph.link_nodes(b, c).unwrap();

        let mut frontier = FrontierRegistry::new();
        frontier.refresh(&graph);

        let planner = RoutePlanner::new().with_max_expansions(Some(1));
        assert_eq!(
            planner.plan(&graph, &frontier, a),
            Err(ExploreError::SearchBudgetExhausted {
                start: a,
                expansions: 1,
            })
        );

        // Two expansions are enough to settle a and b and then pop c.
        let planner = RoutePlanner::new().with_max_expansions(Some(2));
        let route = planner.plan(&graph, &frontier, a).unwrap().unwrap();
        assert_eq!(route.destination, c);

        let planner = RoutePlanner::new();
        let route = planner.plan(&graph, &frontier, a).unwrap().unwrap();
        assert_eq!(route.destination, c);
    }

    #[test]
    fn test_queue_entry_order() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry { cost: 5, seq: 0, node: NodeId::new(0) });
        heap.push(QueueEntry { cost: 2, seq: 2, node: NodeId::new(1) });
        heap.push(QueueEntry { cost: 2, seq: 1, node: NodeId::new(2) });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.node.value())
            .collect();
        assert_eq!(order, vec![2, 1, 0]);
    }
}
