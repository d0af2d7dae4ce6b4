//! Exploration state machine states.

use serde::Serialize;

use crate::graph::NodeId;

/// Phase the driver reached within a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationState {
    /// Sensing at the current cell
    Scanning,

    /// Standing on a decision point seen for the first time
    AtNewNode(NodeId),

    /// Standing on a decision point already in the graph
    AtKnownNode(NodeId),

    /// Taking one local step (forward, left, right or turning around)
    LocalContinue,

    /// Searching for the nearest frontier
    Plan,

    /// Following a planned route
    Navigating {
        /// Frontier node the route ends at
        destination: NodeId,
    },

    /// Finished
    Done(ExplorationOutcome),
}

impl ExplorationState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExplorationState::Done(_))
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ExplorationState::Scanning => "Scanning",
            ExplorationState::AtNewNode(_) => "AtNewNode",
            ExplorationState::AtKnownNode(_) => "AtKnownNode",
            ExplorationState::LocalContinue => "LocalContinue",
            ExplorationState::Plan => "Plan",
            ExplorationState::Navigating { .. } => "Navigating",
            ExplorationState::Done(_) => "Done",
        }
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExplorationOutcome {
    /// No node has an unresolved segment left.
    FrontierExhausted,

    /// Back at the start cell, not facing back the way the run began.
    LoopClosed,

    /// Frontier nodes exist but none can be reached over resolved segments.
    NoFrontierReachable,
}

impl ExplorationOutcome {
    /// Outcome name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ExplorationOutcome::FrontierExhausted => "FrontierExhausted",
            ExplorationOutcome::LoopClosed => "LoopClosed",
            ExplorationOutcome::NoFrontierReachable => "NoFrontierReachable",
        }
    }

    /// Did the run map everything it could reach?
    pub fn is_complete(&self) -> bool {
        !matches!(self, ExplorationOutcome::NoFrontierReachable)
    }
}

impl std::fmt::Display for ExplorationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
