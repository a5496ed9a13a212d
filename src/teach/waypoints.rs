//! Taught waypoint storage.

use crate::config::units::Steps;
use crate::motion::Axis;

/// Which end of the move a waypoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Waypoint {
    /// Start of the replay move.
    In,
    /// End of the replay move.
    Out,
}

/// The four taught step positions.
///
/// A coordinate reads as zero until its teach phase has completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaypointPair {
    x_in: Steps,
    y_in: Steps,
    x_out: Steps,
    y_out: Steps,
    taught: u8,
}

impl WaypointPair {
    /// All four coordinates at zero, none taught.
    pub const fn new() -> Self {
        Self {
            x_in: Steps(0),
            y_in: Steps(0),
            x_out: Steps(0),
            y_out: Steps(0),
            taught: 0,
        }
    }

    /// Record a taught coordinate.
    pub fn record(&mut self, axis: Axis, waypoint: Waypoint, position: Steps) {
        *self.slot_mut(axis, waypoint) = position;
        self.taught |= Self::bit(axis, waypoint);
    }

    /// Read a coordinate.
    pub fn get(&self, axis: Axis, waypoint: Waypoint) -> Steps {
        match (axis, waypoint) {
            (Axis::X, Waypoint::In) => self.x_in,
            (Axis::Y, Waypoint::In) => self.y_in,
            (Axis::X, Waypoint::Out) => self.x_out,
            (Axis::Y, Waypoint::Out) => self.y_out,
        }
    }

    /// Whether a coordinate has been taught since the last reset.
    pub fn is_taught(&self, axis: Axis, waypoint: Waypoint) -> bool {
        self.taught & Self::bit(axis, waypoint) != 0
    }

    /// `[x, y]` targets for one end of the move.
    pub fn targets(&self, waypoint: Waypoint) -> [Steps; 2] {
        [self.get(Axis::X, waypoint), self.get(Axis::Y, waypoint)]
    }

    /// Rail travel between the two ends, `|XOut - XIn|`.
    pub fn rail_distance(&self) -> Steps {
        Steps((self.x_out.0 - self.x_in.0).abs())
    }

    fn slot_mut(&mut self, axis: Axis, waypoint: Waypoint) -> &mut Steps {
        match (axis, waypoint) {
            (Axis::X, Waypoint::In) => &mut self.x_in,
            (Axis::Y, Waypoint::In) => &mut self.y_in,
            (Axis::X, Waypoint::Out) => &mut self.x_out,
            (Axis::Y, Waypoint::Out) => &mut self.y_out,
        }
    }

    fn bit(axis: Axis, waypoint: Waypoint) -> u8 {
        match (axis, waypoint) {
            (Axis::X, Waypoint::In) => 0b0001,
            (Axis::Y, Waypoint::In) => 0b0010,
            (Axis::X, Waypoint::Out) => 0b0100,
            (Axis::Y, Waypoint::Out) => 0b1000,
        }
    }
}
