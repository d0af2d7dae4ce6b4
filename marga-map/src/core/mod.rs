//! Core types for the Marga track explorer.
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer cell indices, x grows East, y grows South
//! - [`Direction`]: The four grid headings with turn arithmetic
//!
//! ### Vehicle State
//! - [`Pose`]: Vehicle location and heading
//! - [`Openings`]: Forward/left/right sensing snapshot

mod direction;
mod point;
mod pose;

pub use direction::Direction;
pub use point::GridCoord;
pub use pose::{Openings, Pose};
