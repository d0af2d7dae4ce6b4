//! Error types for the simulator

use marga_map::ExploreError;
use thiserror::Error;

use crate::track::LayoutError;

/// Simulator error type
#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Track layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Exploration failed [{}]: {}", .0.code(), .0)]
    Explore(#[from] ExploreError),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<toml::de::Error> for SimError {
    fn from(e: toml::de::Error) -> Self {
        SimError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Export(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
