//! Exploration driver: the per-tick state machine.
//!
//! Every tick the vehicle renders, senses, records decision points in the
//! graph and then moves. While standing on a node with unexplored sides (or
//! between nodes) it follows a local heuristic: forward, else left, else
//! right, else turn around. Once the node it stands on is fully explored it
//! plans to the nearest frontier and drives there in one go.

use serde::Serialize;

use crate::core::{Openings, Pose};
use crate::error::{ExploreError, GraphError, Result};
use crate::graph::{FrontierRegistry, NodeId, TrackGraph};
use crate::planning::{Route, RoutePlanner};
use crate::world::{Renderer, TrackWorld};

use super::config::ExplorerConfig;
use super::executor::RouteExecutor;
use super::state::{ExplorationOutcome, ExplorationState};

/// What happened during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorationStep {
    /// 1-based tick number.
    pub tick: u64,
    /// Last state the driver passed through.
    pub state: ExplorationState,
    /// Node the vehicle stood on when it sensed, if any.
    pub node: Option<NodeId>,
    /// Route followed this tick, if any.
    pub route: Option<Route>,
    /// Pose at the end of the tick.
    pub pose: Pose,
    /// Frontier size after this tick's refresh.
    pub frontier_len: usize,
    /// Set on the tick that ended the run.
    pub outcome: Option<ExplorationOutcome>,
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplorationReport {
    /// How the run ended.
    pub outcome: ExplorationOutcome,
    /// Ticks taken.
    pub ticks: u64,
    /// Decision points discovered.
    pub node_count: usize,
    /// Segments created.
    pub segment_count: usize,
    /// Segments with a known target.
    pub resolved_segment_count: usize,
    /// Planned routes followed.
    pub routes_executed: usize,
    /// Cells travelled along planned routes.
    pub route_distance: u64,
    /// Graph errors logged and skipped.
    pub recovered_errors: usize,
}

impl std::fmt::Display for ExplorationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} after {} ticks: {} nodes, {}/{} segments resolved, {} routes ({} cells)",
            self.outcome,
            self.ticks,
            self.node_count,
            self.resolved_segment_count,
            self.segment_count,
            self.routes_executed,
            self.route_distance
        )?;
        if self.recovered_errors > 0 {
            write!(f, ", {} recovered errors", self.recovered_errors)?;
        }
        Ok(())
    }
}

/// Autonomous track explorer.
///
/// Owns the map and the collaborators for the duration of a run.
///
/// # Example
///
/// ```ignore
/// let start = Pose::new(GridCoord::new(2, 1), Direction::East);
/// let mut explorer = Explorer::new(ExplorerConfig::default(), track, NullRenderer, start);
/// let report = explorer.run()?;
/// println!("{}", report);
/// ```
pub struct Explorer<W, R> {
    config: ExplorerConfig,
    graph: TrackGraph,
    frontier: FrontierRegistry,
    planner: RoutePlanner,
    executor: RouteExecutor,
    world: W,
    renderer: R,
    start: Pose,
    pose: Pose,
    /// Most recently visited node.
    previous: Option<NodeId>,
    ticks: u64,
    state: ExplorationState,
    outcome: Option<ExplorationOutcome>,
    routes_executed: usize,
    route_distance: u64,
    recovered_errors: usize,
}

impl<W: TrackWorld, R: Renderer> Explorer<W, R> {
    /// Create an explorer that starts at `start`.
    pub fn new(config: ExplorerConfig, world: W, renderer: R, start: Pose) -> Self {
        let planner = RoutePlanner::new().with_max_expansions(config.max_expansions);
        Self {
            config,
            graph: TrackGraph::new(),
            frontier: FrontierRegistry::new(),
            planner,
            executor: RouteExecutor::new(),
            world,
            renderer,
            start,
            pose: start,
            previous: None,
            ticks: 0,
            state: ExplorationState::Scanning,
            outcome: None,
            routes_executed: 0,
            route_distance: 0,
            recovered_errors: 0,
        }
    }

    /// Map built so far.
    pub fn graph(&self) -> &TrackGraph {
        &self.graph
    }

    /// Frontier as of the last tick.
    pub fn frontier(&self) -> &FrontierRegistry {
        &self.frontier
    }

    /// Current vehicle pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Pose the run started from.
    pub fn start(&self) -> Pose {
        self.start
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Last state reached.
    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// Outcome, once the run has ended.
    pub fn outcome(&self) -> Option<ExplorationOutcome> {
        self.outcome
    }

    /// Most recently visited node.
    pub fn previous_node(&self) -> Option<NodeId> {
        self.previous
    }

    /// Recoverable graph errors skipped so far.
    pub fn recovered_errors(&self) -> usize {
        self.recovered_errors
    }

    /// The world collaborator.
    pub fn world(&self) -> &W {
        &self.world
    }

    /// The renderer collaborator.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Configuration in use.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Consume the explorer and keep the map.
    pub fn into_graph(self) -> TrackGraph {
        self.graph
    }

    /// Run ticks until an outcome is reached.
    ///
    /// Sleeps `tick_interval_ms` between ticks.
    ///
    /// # Errors
    /// Any fatal error from [`step`](Self::step), including
    /// [`ExploreError::TickBudgetExhausted`] and, when an expansion cap is
    /// configured, [`ExploreError::SearchBudgetExhausted`].
    pub fn run(&mut self) -> Result<ExplorationReport> {
        let interval = self.config.tick_interval();
        log::info!(
            "Exploring from {} (tick limit {})",
            self.start,
            self.config.max_ticks
        );

        loop {
            let step = self.step().inspect_err(|e| {
                log::error!(
                    "[{}] Exploration aborted at tick {}: {}",
                    e.code(),
                    self.ticks,
                    e
                );
            })?;

            if let Some(outcome) = step.outcome {
                let report = self.report(outcome);
                log::info!("Exploration finished: {}", report);
                return Ok(report);
            }

            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }
    }

    /// Execute one tick.
    ///
    /// After the run has ended this returns the final state again without
    /// touching the world.
    pub fn step(&mut self) -> Result<ExplorationStep> {
        if let Some(outcome) = self.outcome {
            return Ok(self.snapshot(None, None, Some(outcome)));
        }

        if self.ticks >= self.config.max_ticks {
            return Err(ExploreError::TickBudgetExhausted {
                ticks: self.config.max_ticks,
            });
        }
        self.ticks += 1;
        self.state = ExplorationState::Scanning;

        self.renderer.render(&self.pose);
        let openings = self.world.sense_openings(self.pose)?;

        let node = if openings.is_junction() {
            self.visit_junction(openings)?
        } else {
            None
        };

        self.frontier.refresh(&self.graph);

        let mut route = None;
        let mut outcome = None;

        match node {
            Some(current) if !self.graph.has_unresolved(current)? => {
                if !self.frontier.is_empty() {
                    self.state = ExplorationState::Plan;
                    match self.planner.plan(&self.graph, &self.frontier, current)? {
                        Some(planned) => {
                            self.follow(&planned)?;
                            route = Some(planned);
                        }
                        None => outcome = Some(ExplorationOutcome::NoFrontierReachable),
                    }
                }
            }
            _ => {
                self.state = ExplorationState::LocalContinue;
                self.local_move(openings)?;
            }
        }

        let outcome = outcome.or_else(|| self.check_termination());
        if let Some(outcome) = outcome {
            self.outcome = Some(outcome);
            self.state = ExplorationState::Done(outcome);
        }

        log::trace!(
            "Tick {}: {} at {} ({} frontier)",
            self.ticks,
            self.state.name(),
            self.pose,
            self.frontier.len()
        );

        Ok(self.snapshot(node, route, outcome))
    }

    /// Record the decision point under the vehicle.
    ///
    /// Returns the node the vehicle stands on, or `None` when a recoverable
    /// graph error means the local heuristic should take over this tick.
    fn visit_junction(&mut self, openings: Openings) -> Result<Option<NodeId>> {
        let location = self.pose.location;

        let node = match self.graph.find_node_by_location(location) {
            Some(known) => {
                self.state = ExplorationState::AtKnownNode(known);
                known
            }
            None => match self
                .graph
                .create_node(location, self.pose.orientation, openings)
            {
                Ok(created) => {
                    log::info!(
                        "Discovered {} at {} ({} open side(s))",
                        created,
                        location,
                        openings.count()
                    );
                    self.state = ExplorationState::AtNewNode(created);
                    created
                }
                Err(e) => return self.recover(e).map(|()| None),
            },
        };

        let linked = match self.previous {
            Some(previous) if previous != node => self.graph.link_nodes(node, previous),
            _ => Ok(()),
        };
        self.previous = Some(node);

        match linked {
            Ok(()) => Ok(Some(node)),
            Err(e) => self.recover(e).map(|()| None),
        }
    }

    /// Log and count a recoverable graph error, propagate anything else.
    fn recover(&mut self, error: GraphError) -> Result<()> {
        if !error.is_recoverable() {
            return Err(error.into());
        }
        self.recovered_errors += 1;
        log::warn!(
            "Ignoring graph error at {} (tick {}): {}",
            self.pose,
            self.ticks,
            error
        );
        Ok(())
    }

    /// One step of the forward / left / right / turn-around heuristic.
    fn local_move(&mut self, openings: Openings) -> Result<()> {
        let heading = self.pose.orientation;

        let turn = if openings.forward {
            None
        } else if openings.left {
            Some(heading.turn_left())
        } else if openings.right {
            Some(heading.turn_right())
        } else {
            // Dead end: face back the way we came and sense again next tick.
            let pose = self.world.rotate(self.pose, heading.turn_right())?;
            self.pose = self.world.rotate(pose, pose.orientation.turn_right())?;
            log::debug!("Dead end at {}, turning around", self.pose.location);
            return Ok(());
        };

        if let Some(direction) = turn {
            self.pose = self.world.rotate(self.pose, direction)?;
        }
        self.pose = self.world.advance(self.pose, self.pose.orientation)?;
        Ok(())
    }

    /// Drive along a planned route.
    fn follow(&mut self, route: &Route) -> Result<()> {
        self.state = ExplorationState::Navigating {
            destination: route.destination,
        };
        log::debug!("Following route {}", route);

        let executed = self.executor.execute(
            &self.graph,
            route,
            self.pose,
            &mut self.world,
            &mut self.renderer,
        )?;

        self.pose = executed.pose;
        self.previous = Some(executed.destination);
        self.routes_executed += 1;
        self.route_distance += u64::from(executed.distance);
        Ok(())
    }

    /// Evaluate the two completion heuristics, frontier first.
    fn check_termination(&self) -> Option<ExplorationOutcome> {
        let mapped_something =
            self.graph.node_count() > 1 && self.graph.resolved_segment_count() > 0;
        if self.frontier.is_empty() && mapped_something {
            return Some(ExplorationOutcome::FrontierExhausted);
        }

        if self.pose.location == self.start.location
            && self.graph.node_count() > 1
            && self.pose.orientation != self.start.orientation.opposite()
        {
            return Some(ExplorationOutcome::LoopClosed);
        }

        None
    }

    fn snapshot(
        &self,
        node: Option<NodeId>,
        route: Option<Route>,
        outcome: Option<ExplorationOutcome>,
    ) -> ExplorationStep {
        ExplorationStep {
            tick: self.ticks,
            state: self.state,
            node,
            route,
            pose: self.pose,
            frontier_len: self.frontier.len(),
            outcome,
        }
    }

    fn report(&self, outcome: ExplorationOutcome) -> ExplorationReport {
        ExplorationReport {
            outcome,
            ticks: self.ticks,
            node_count: self.graph.node_count(),
            segment_count: self.graph.segment_count(),
            resolved_segment_count: self.graph.resolved_segment_count(),
            routes_executed: self.routes_executed,
            route_distance: self.route_distance,
            recovered_errors: self.recovered_errors,
        }
    }
}
