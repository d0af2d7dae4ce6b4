//! Route planning over the discovered graph.

mod nearest_frontier;
mod route;

pub use nearest_frontier::{RoutePlanner, find_route_to_nearest_frontier};
pub use route::Route;
