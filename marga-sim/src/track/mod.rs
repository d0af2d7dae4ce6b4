//! Simulated grid track.
//!
//! The sensor model is exact: a side is open when the neighbouring cell is
//! inside the grid and on the track.

mod layout;

pub use layout::{BUILTIN_LAYOUT, Cell, LayoutError, TrackLayout};

use marga_map::{Direction, Openings, Pose, TrackWorld, WorldError};

/// [`TrackWorld`] backed by a static [`TrackLayout`].
#[derive(Clone, Debug)]
pub struct SimulatedTrack {
    layout: TrackLayout,
    advances: u64,
    blocked: u64,
}

impl SimulatedTrack {
    /// Wrap a layout.
    pub fn new(layout: TrackLayout) -> Self {
        Self {
            layout,
            advances: 0,
            blocked: 0,
        }
    }

    /// The underlying layout.
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Cells moved so far.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    /// Advance commands that hit the edge of the track.
    pub fn blocked_advances(&self) -> u64 {
        self.blocked
    }

    fn ensure_on_track(&self, pose: Pose) -> Result<(), &'static str> {
        if self.layout.is_track(pose.location) {
            Ok(())
        } else {
            Err("vehicle is off the track")
        }
    }
}

impl TrackWorld for SimulatedTrack {
    fn sense_openings(&self, pose: Pose) -> Result<Openings, WorldError> {
        self.ensure_on_track(pose)
            .map_err(|reason| WorldError::Sensing {
                pose,
                reason: reason.to_string(),
            })?;

        let heading = pose.orientation;
        Ok(Openings::new(
            self.layout.is_track(pose.neighbor(heading)),
            self.layout.is_track(pose.neighbor(heading.turn_left())),
            self.layout.is_track(pose.neighbor(heading.turn_right())),
        ))
    }

    fn advance(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError> {
        self.ensure_on_track(pose)
            .map_err(|reason| WorldError::Actuation {
                pose,
                reason: reason.to_string(),
            })?;

        let next = pose.neighbor(direction);
        if self.layout.is_track(next) {
            self.advances += 1;
            Ok(Pose::new(next, pose.orientation))
        } else {
            self.blocked += 1;
            tracing::trace!("Advance {} from {} blocked", direction, pose);
            Ok(pose)
        }
    }

    fn rotate(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError> {
        Ok(pose.facing(direction))
    }
}
