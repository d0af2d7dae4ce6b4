//! Collaborator traits connecting the explorer to a vehicle.
//!
//! The explorer never touches sensors, motors or displays directly. It asks
//! a [`TrackWorld`] for openings and motion, and hands every pose it ends up
//! in to a [`Renderer`].

use crate::core::{Direction, Openings, Pose};
use crate::error::WorldError;

/// Sensing and actuation on a grid track.
///
/// Implement this trait to connect the [`Explorer`](crate::Explorer) to a
/// simulated track or to real hardware.
///
/// # Example
///
/// ```ignore
/// struct Rover {
///     // Hardware handles
/// }
///
/// impl TrackWorld for Rover {
///     fn sense_openings(&self, pose: Pose) -> Result<Openings, WorldError> {
///         Ok(Openings::new(self.front.clear(), self.left.clear(), self.right.clear()))
///     }
///
///     fn advance(&mut self, pose: Pose, dir: Direction) -> Result<Pose, WorldError> {
///         self.drive_one_cell(dir)?;
///         Ok(self.read_pose())
///     }
///
///     fn rotate(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError> {
///         self.turn_to(direction)?;
///         Ok(pose.facing(direction))
///     }
/// }
/// ```
pub trait TrackWorld {
    /// Report which sides of `pose` continue as track.
    ///
    /// Forward, left and right are relative to `pose.orientation`.
    fn sense_openings(&self, pose: Pose) -> Result<Openings, WorldError>;

    /// Move one cell in `direction` if that cell is track.
    ///
    /// Returns the new pose. When the move is blocked the pose comes back
    /// unchanged; that is not an error.
    fn advance(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError>;

    /// Turn in place to face `direction`.
    fn rotate(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError>;
}

/// Visualisation hook called with every pose the vehicle reaches.
///
/// Rendering is a side effect only and cannot fail the run.
pub trait Renderer {
    /// Draw the vehicle at `pose`.
    fn render(&mut self, pose: &Pose);
}

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _pose: &Pose) {}
}

impl<W: TrackWorld + ?Sized> TrackWorld for &mut W {
    fn sense_openings(&self, pose: Pose) -> Result<Openings, WorldError> {
        (**self).sense_openings(pose)
    }

    fn advance(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError> {
        (**self).advance(pose, direction)
    }

    fn rotate(&mut self, pose: Pose, direction: Direction) -> Result<Pose, WorldError> {
        (**self).rotate(pose, direction)
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, pose: &Pose) {
        (**self).render(pose)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, pose: &Pose) {
        (**self).render(pose)
    }
}
