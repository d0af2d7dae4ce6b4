//! Error types for track mapping and exploration.
//!
//! Errors fall into three groups:
//! - [`GraphError`]: caller mistakes against the graph store. The two
//!   geometry errors are recoverable; the explorer logs them and keeps going.
//! - [`WorldError`]: sensing or actuation failures reported by the world
//!   collaborator. These abort the run.
//! - [`ExploreError`]: everything that ends a run abnormally, including
//!   internal consistency failures of the map itself.
//!
//! Running out of reachable frontier is not an error; see
//! [`ExplorationOutcome`](crate::exploration::ExplorationOutcome).

use thiserror::Error;

use crate::core::{GridCoord, Pose};
use crate::graph::{NodeId, SegmentId};

/// Result type alias for exploration operations.
pub type Result<T> = std::result::Result<T, ExploreError>;

/// Errors raised by [`TrackGraph`](crate::graph::TrackGraph) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node already occupies this cell. Callers must look it up first.
    #[error("node {existing} already exists at {location}")]
    DuplicateLocation {
        /// Cell that was requested.
        location: GridCoord,
        /// Node that already lives there.
        existing: NodeId,
    },

    /// The two cells share neither a row nor a column.
    #[error("cannot link {from} to {to}: cells are not axis-aligned")]
    NonAxisAligned {
        /// Location of the first node.
        from: GridCoord,
        /// Location of the second node.
        to: GridCoord,
    },

    /// No node with this id was ever created.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// No segment with this id was ever created.
    #[error("unknown segment {0}")]
    UnknownSegment(SegmentId),

    /// The named arena has used up the 32-bit id space.
    #[error("{0} arena is full")]
    ArenaFull(&'static str),
}

impl GraphError {
    /// Geometry errors caused by upstream sensing; the explorer retries on
    /// the next tick instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateLocation { .. } | Self::NonAxisAligned { .. }
        )
    }
}

/// Failures reported by the sensing/actuation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// Openings could not be sensed at this pose.
    #[error("sensing failed at {pose}: {reason}")]
    Sensing {
        /// Pose the vehicle was in.
        pose: Pose,
        /// Collaborator-provided detail.
        reason: String,
    },

    /// A rotate or advance command could not be carried out.
    #[error("actuation failed at {pose}: {reason}")]
    Actuation {
        /// Pose the vehicle was in.
        pose: Pose,
        /// Collaborator-provided detail.
        reason: String,
    },
}

/// Errors that end an exploration run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExploreError {
    /// Graph store misuse that could not be recovered locally.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Sensing or actuation failure.
    #[error("world error: {0}")]
    World(#[from] WorldError),

    /// The planner's predecessor chain does not lead back to the start.
    #[error(
        "route reconstruction from {start} to {destination} broke at {stalled_at}: predecessor chain is inconsistent"
    )]
    RouteReconstructionInconsistent {
        /// Node the search started from.
        start: NodeId,
        /// Frontier node the search accepted.
        destination: NodeId,
        /// Node whose predecessor record was missing or looped.
        stalled_at: NodeId,
    },

    /// A planned route contains a segment that leads nowhere known.
    #[error(
        "route {start} -> {destination} uses unresolved segment {segment} (route: {route:?})"
    )]
    UnresolvedSegmentInRoute {
        /// Offending segment.
        segment: SegmentId,
        /// Route start node.
        start: NodeId,
        /// Route destination node.
        destination: NodeId,
        /// Full segment sequence of the route.
        route: Vec<SegmentId>,
    },

    /// The vehicle did not end up where a resolved segment says it leads.
    #[error("segment {segment} should end at {expected} but vehicle is at {actual}")]
    ArrivalMismatch {
        /// Segment being traversed.
        segment: SegmentId,
        /// Location of the segment's target node.
        expected: GridCoord,
        /// Location reported by the collaborator.
        actual: GridCoord,
    },

    /// The route search settled its configured maximum of nodes without
    /// reaching a frontier node. Says nothing about reachability.
    #[error("route search from {start} gave up after {expansions} expansions")]
    SearchBudgetExhausted {
        /// Node the search started from.
        start: NodeId,
        /// Configured expansion limit.
        expansions: usize,
    },

    /// The run used up its tick budget without meeting a termination
    /// condition.
    #[error("exploration did not terminate within {ticks} ticks")]
    TickBudgetExhausted {
        /// Configured tick limit.
        ticks: u64,
    },
}

impl ExploreError {
    /// Get a short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Graph(_) => "GRAPH",
            Self::World(_) => "WORLD",
            Self::RouteReconstructionInconsistent { .. } => "ROUTE_RECONSTRUCTION",
            Self::UnresolvedSegmentInRoute { .. } => "UNRESOLVED_SEGMENT",
            Self::ArrivalMismatch { .. } => "ARRIVAL_MISMATCH",
            Self::SearchBudgetExhausted { .. } => "SEARCH_BUDGET",
            Self::TickBudgetExhausted { .. } => "TICK_BUDGET",
        }
    }

    /// True for failures that point at a defect in map maintenance rather
    /// than at the environment.
    pub fn is_internal_inconsistency(&self) -> bool {
        matches!(
            self,
            Self::RouteReconstructionInconsistent { .. }
                | Self::UnresolvedSegmentInRoute { .. }
                | Self::ArrivalMismatch { .. }
        )
    }
}
