//! Configuration loading for the simulator

use std::path::{Path, PathBuf};

use marga_map::{Direction, ExplorerConfig, GridCoord, Pose};
use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::track::TrackLayout;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub track: TrackConfig,
    #[serde(default)]
    pub exploration: ExplorationConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Track selection
#[derive(Clone, Debug, Deserialize)]
pub struct TrackConfig {
    /// Layout text; the built-in 13x13 loop when unset
    #[serde(default)]
    pub layout: Option<String>,

    /// Start cell; the layout's `S` cell when unset
    #[serde(default)]
    pub start: Option<GridCoord>,

    /// Initial heading (default: East)
    #[serde(default = "default_orientation")]
    pub orientation: Direction,
}

/// Explorer tuning
#[derive(Clone, Debug, Deserialize)]
pub struct ExplorationConfig {
    /// Tick watchdog (default: 10000)
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// Pause between ticks in milliseconds (default: 150)
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Cap on nodes settled per route search (default: unbounded)
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

/// Console output
#[derive(Clone, Debug, Deserialize)]
pub struct RenderConfig {
    /// Draw the track every tick (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Clear the terminal before each frame (default: true)
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

/// Output configuration
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the final graph as JSON here
    #[serde(default)]
    pub graph_path: Option<PathBuf>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            layout: None,
            start: None,
            orientation: default_orientation(),
        }
    }
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            tick_interval_ms: default_tick_interval_ms(),
            max_expansions: None,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            clear_screen: default_true(),
        }
    }
}

// Default value functions
fn default_orientation() -> Direction {
    Direction::East
}
fn default_max_ticks() -> u64 {
    ExplorerConfig::default().max_ticks
}
fn default_tick_interval_ms() -> u64 {
    150
}
fn default_true() -> bool {
    true
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("Failed to read config file: {}", e)))?;
        let config: SimConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse the configured layout, or the built-in one
    pub fn layout(&self) -> Result<TrackLayout> {
        let layout = match &self.track.layout {
            Some(text) => TrackLayout::parse(text)?,
            None => TrackLayout::builtin()?,
        };
        Ok(layout)
    }

    /// Resolve the start pose against `layout`
    pub fn start_pose(&self, layout: &TrackLayout) -> Result<Pose> {
        let location = self
            .track
            .start
            .or_else(|| layout.start())
            .ok_or_else(|| {
                SimError::Config(
                    "no start cell: set track.start or mark one with 'S'".to_string(),
                )
            })?;

        if !layout.is_track(location) {
            return Err(SimError::Config(format!(
                "start cell {} is not on the track",
                location
            )));
        }

        Ok(Pose::new(location, self.track.orientation))
    }

    /// Explorer settings for the core library
    pub fn explorer_config(&self) -> ExplorerConfig {
        ExplorerConfig::default()
            .with_max_ticks(self.exploration.max_ticks)
            .with_tick_interval_ms(self.exploration.tick_interval_ms)
            .with_max_expansions(self.exploration.max_expansions)
    }
}
