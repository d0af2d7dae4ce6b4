//! Topological track map.
//!
//! - [`TrackGraph`]: append-only arena of nodes and directed segments
//! - [`FrontierRegistry`]: nodes with at least one unresolved segment
//!
//! Every resolved segment has a reciprocal partner pointing back with the
//! same distance, and a node owns at most one segment per direction.

mod frontier;
mod store;
mod types;

pub use frontier::FrontierRegistry;
pub use store::{MAX_SEGMENTS_PER_NODE, NodeDisplay, TrackGraph};
pub use types::{Node, NodeId, Segment, SegmentId};
