//! Autonomous track exploration.
//!
//! The [`Explorer`] owns the graph, the frontier registry and the two
//! collaborators, and advances one tick per [`Explorer::step`] call.
//!
//! # Example
//!
//! ```ignore
//! use marga_map::exploration::{Explorer, ExplorerConfig};
//! use marga_map::world::NullRenderer;
//!
//! let config = ExplorerConfig::default();
//! let mut explorer = Explorer::new(config, my_track, NullRenderer, start);
//! match explorer.run() {
//!     Ok(report) => println!("{}", report),
//!     Err(e) => eprintln!("exploration failed: {}", e),
//! }
//! ```

mod config;
mod executor;
mod explorer;
mod state;

pub use config::ExplorerConfig;
pub use executor::{ExecutedRoute, RouteExecutor};
pub use explorer::{ExplorationReport, ExplorationStep, Explorer};
pub use state::{ExplorationOutcome, ExplorationState};
