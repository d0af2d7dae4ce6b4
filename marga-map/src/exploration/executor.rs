//! Route executor: turns a planned route into rotate/advance commands.

use crate::core::Pose;
use crate::error::{ExploreError, Result};
use crate::graph::{NodeId, TrackGraph};
use crate::planning::Route;
use crate::world::{Renderer, TrackWorld};

/// Where the vehicle ended up after following a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutedRoute {
    /// Final pose reported by the world.
    pub pose: Pose,
    /// Node the vehicle is standing on.
    pub destination: NodeId,
    /// Cells advanced along the route.
    pub distance: u32,
}

/// Drives the vehicle along resolved segments.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteExecutor;

impl RouteExecutor {
    /// Create an executor.
    pub fn new() -> Self {
        Self
    }

    /// Follow `route` from `pose`.
    ///
    /// For each segment the vehicle turns to the segment's direction and
    /// advances `distance` cells, rendering after every advance. Arrival at
    /// the segment's target is checked before the next segment starts. At
    /// the destination the vehicle turns toward its first unexplored
    /// segment, if it has one.
    ///
    /// # Errors
    /// - [`ExploreError::UnresolvedSegmentInRoute`] if a segment has no
    ///   target.
    /// - [`ExploreError::ArrivalMismatch`] if the world did not carry the
    ///   vehicle to the segment's target.
    /// - [`ExploreError::World`] for collaborator failures.
    pub fn execute<W, R>(
        &self,
        graph: &TrackGraph,
        route: &Route,
        mut pose: Pose,
        world: &mut W,
        renderer: &mut R,
    ) -> Result<ExecutedRoute>
    where
        W: TrackWorld + ?Sized,
        R: Renderer + ?Sized,
    {
        let mut travelled = 0u32;

        for &segment_id in &route.segments {
            let segment = graph.segment(segment_id)?;
            let target = segment
                .target
                .ok_or_else(|| ExploreError::UnresolvedSegmentInRoute {
                    segment: segment_id,
                    start: route.start,
                    destination: route.destination,
                    route: route.segments.clone(),
                })?;
            let expected = graph.node(target)?.location;

            pose = world.rotate(pose, segment.direction)?;
            for _ in 0..segment.distance {
                pose = world.advance(pose, segment.direction)?;
                renderer.render(&pose);
            }
            travelled += segment.distance;

            if pose.location != expected {
                return Err(ExploreError::ArrivalMismatch {
                    segment: segment_id,
                    expected,
                    actual: pose.location,
                });
            }
            log::trace!("Reached {} at {} via {}", target, pose.location, segment_id);
        }

        if let Some(next) = graph.first_unresolved(route.destination)? {
            pose = world.rotate(pose, next.direction)?;
        }

        Ok(ExecutedRoute {
            pose,
            destination: route.destination,
            distance: travelled,
        })
    }
}
