//! Marga-Sim - grid track simulator for the marga-map explorer
//!
//! Supplies the collaborators the core leaves abstract: a static text track
//! with an exact three-way sensor, a console renderer, TOML configuration and
//! a JSON export of the finished graph.

pub mod config;
pub mod error;
pub mod export;
pub mod render;
pub mod track;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use render::ConsoleRenderer;
pub use track::{SimulatedTrack, TrackLayout};
