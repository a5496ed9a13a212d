//! Teach-in: jogging axes with the encoder and recording waypoints.

mod jog;
mod waypoints;

pub use jog::JogController;
pub use waypoints::{Waypoint, WaypointPair};
