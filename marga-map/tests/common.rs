//! Test utilities for exploration scenarios.
//!
//! Provides a character-grid track world and a few reference layouts.

#![allow(dead_code)]

use marga_map::graph::TrackGraph;
use marga_map::{Direction, GridCoord, Openings, Pose, Renderer, TrackWorld, WorldError};

/// The 13x13 reference loop. `S` marks the start/finish cell at (2, 1).
pub const REFERENCE_LOOP: &str = "\
.............
..S######....
..#..#..#....
..#..####....
..#.....#....
..####..####.
..#..#...#.#.
..########.#.
.....#...#.#.
....########.
....#.....#..
....#######..
.............";

/// Plain rectangle with four corners.
pub const RING: &str = "\
......
.S###.
.#..#.
.####.
......";

/// A stick leading into a ring.
pub const LOLLIPOP: &str = "\
.......
.####..
.#..#..
.####..
...#...
...#...
...S...
.......";

/// Loop with a middle rung and two dead-end spurs.
pub const LADDER: &str = "\
.......
.S###..
.#.#.#.
.#####.
.......";

/// Minimal track world over a character grid. `#` and `S` are track.
pub struct GridTrack {
    rows: Vec<Vec<char>>,
    pub advances: usize,
    pub rotations: usize,
}

impl GridTrack {
    pub fn parse(layout: &str) -> Self {
        Self {
            rows: layout.lines().map(|line| line.chars().collect()).collect(),
            advances: 0,
            rotations: 0,
        }
    }

    pub fn is_track(&self, cell: GridCoord) -> bool {
        if cell.x < 0 || cell.y < 0 {
            return false;
        }
        self.rows
            .get(cell.y as usize)
            .and_then(|row| row.get(cell.x as usize))
            .is_some_and(|&c| c == '#' || c == 'S')
    }

    /// Location of the `S` cell.
    pub fn start_cell(&self) -> GridCoord {
        for (y, row) in self.rows.iter().enumerate() {
            if let Some(x) = row.iter().position(|&c| c == 'S') {
                return GridCoord::new(x as i32, y as i32);
            }
        }
        panic!("layout has no start cell");
    }

    /// Every track cell.
    pub fn track_cells(&self) -> Vec<GridCoord> {
        let mut cells = Vec::new();
        for (y, row) in self.rows.iter().enumerate() {
            for (x, _) in row.iter().enumerate() {
                let cell = GridCoord::new(x as i32, y as i32);
                if self.is_track(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}

impl TrackWorld for GridTrack {
    fn sense_openings(&self, pose: Pose) -> Result<Openings, WorldError> {
        if !self.is_track(pose.location) {
            return Err(WorldError::Sensing {
                pose,
                reason: "vehicle is off the track".to_string(),
            });
        }
        let o = pose.orientation;
        Ok(Openings::new(
            self.is_track(pose.neighbor(o)),
            self.is_track(pose.neighbor(o.turn_left())),
            self.is_track(pose.neighbor(o.turn_right())),
        ))
    }

    fn advance(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError> {
        let next = pose.neighbor(direction);
        if self.is_track(next) {
            self.advances += 1;
            Ok(Pose::new(next, pose.orientation))
        } else {
            Ok(pose)
        }
    }

    fn rotate(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError> {
        self.rotations += 1;
        Ok(pose.facing(direction))
    }
}

/// Renderer that remembers every pose it was handed.
#[derive(Default)]
pub struct RecordingRenderer {
    pub poses: Vec<Pose>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, pose: &Pose) {
        self.poses.push(*pose);
    }
}

/// Check the structural invariants every graph must hold.
pub fn assert_graph_invariants(graph: &TrackGraph) {
    for (i, node) in graph.nodes().iter().enumerate() {
        assert_eq!(node.id.index(), i, "node ids must match arena position");
        assert!(node.segments.len() <= 4);

        let others = graph
            .nodes()
            .iter()
            .filter(|other| other.location == node.location)
            .count();
        assert_eq!(others, 1, "duplicate location {}", node.location);

        let mut dirs: Vec<Direction> = graph
            .segments_of(node.id)
            .unwrap()
            .map(|s| s.direction)
            .collect();
        let total = dirs.len();
        dirs.sort();
        dirs.dedup();
        assert_eq!(dirs.len(), total, "{} has two segments in one direction", node.id);
    }

    for (i, segment) in graph.segments().iter().enumerate() {
        assert_eq!(segment.id.index(), i, "segment ids must match arena position");
        let Some(target) = segment.target else {
            continue;
        };
        let from = graph.node(segment.origin).unwrap().location;
        let to = graph.node(target).unwrap().location;
        assert_eq!(Direction::between(from, to), Some(segment.direction));
        assert_eq!(segment.distance, from.manhattan_distance(&to));

        let back = graph
            .segment_toward(target, segment.direction.opposite())
            .unwrap()
            .expect("resolved segment without reciprocal");
        let back = graph.segment(back).unwrap();
        assert_eq!(back.target, Some(segment.origin));
        assert_eq!(back.distance, segment.distance);
    }
}
