//! # Marga-Map: Topological Track Exploration
//!
//! Builds a graph of decision points while a vehicle drives an unknown,
//! one-cell-wide grid track, and uses that graph to route the vehicle to
//! whatever part of the track it has not seen yet.
//!
//! ## Architecture
//!
//! - [`core`]: Grid coordinates, headings, poses, sensing snapshots
//! - [`graph`]: Node/segment arena and the frontier registry
//! - [`planning`]: Nearest-frontier Dijkstra and routes
//! - [`exploration`]: Per-tick driver and route executor
//! - [`world`]: Traits the vehicle side implements
//! - [`error`]: Error types
//!
//! ## Data Flow
//!
//! ```text
//!   TrackWorld ──sense──► Explorer ──create/link──► TrackGraph
//!       ▲                    │                          │
//!       │                    │                  refresh │
//!       │                    ▼                          ▼
//!   rotate/advance ◄── RouteExecutor ◄── Route ◄── FrontierRegistry
//!                                          (RoutePlanner)
//! ```
//!
//! ## Coordinate Frame
//!
//! Grid cells are `(x, y)` with x growing East and y growing South, so the
//! row index of a text layout is the y coordinate.

pub mod core;
pub mod error;
pub mod exploration;
pub mod graph;
pub mod planning;
pub mod world;

pub use crate::core::{Direction, GridCoord, Openings, Pose};
pub use error::{ExploreError, GraphError, Result, WorldError};
pub use exploration::{
    ExplorationOutcome, ExplorationReport, ExplorationState, ExplorationStep, Explorer,
    ExplorerConfig, RouteExecutor,
};
pub use graph::{FrontierRegistry, Node, NodeId, Segment, SegmentId, TrackGraph};
pub use planning::{Route, RoutePlanner, find_route_to_nearest_frontier};
pub use world::{NullRenderer, Renderer, TrackWorld};
