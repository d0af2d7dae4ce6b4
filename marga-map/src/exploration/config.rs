//! Explorer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the [`Explorer`](super::Explorer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Abort with an error after this many ticks without an outcome.
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    /// Pause between ticks in [`run`](super::Explorer::run), in
    /// milliseconds (0 = no pause).
    #[serde(default)]
    pub tick_interval_ms: u64,

    /// Cap on nodes settled per route search (unset = unbounded).
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

fn default_max_ticks() -> u64 {
    10_000
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_ticks: default_max_ticks(),
            tick_interval_ms: 0,
            max_expansions: None,
        }
    }
}

impl ExplorerConfig {
    /// Builder-style setter for the tick limit.
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Builder-style setter for the pacing delay.
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Builder-style setter for the route search cap.
    pub fn with_max_expansions(mut self, max_expansions: Option<usize>) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Pacing delay as a [`Duration`](std::time::Duration).
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }
}
