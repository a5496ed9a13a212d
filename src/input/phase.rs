//! Operator phases of the slider.

use core::fmt;

use crate::motion::Axis;
use crate::teach::Waypoint;

/// Operator-facing phase.
///
/// Phases advance strictly in declaration order and wrap from
/// [`Phase::ReturnHome`] back to [`Phase::Idle`]. The preview move to the
/// in waypoints is not a phase of its own; it runs while leaving
/// [`Phase::JogYOut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Phase {
    /// Waiting to begin setup.
    Idle = 0,
    /// Teaching the rail in position.
    JogXIn = 1,
    /// Teaching the pan in position.
    JogYIn = 2,
    /// Teaching the rail out position.
    JogXOut = 3,
    /// Teaching the pan out position.
    JogYOut = 4,
    /// "Set Speed" menu entry.
    SpeedMenu = 5,
    /// Adjusting the speed setting with the encoder.
    SpeedAdjust = 6,
    /// "Start" menu entry.
    StartMenu = 7,
    /// Replaying the move to the out waypoints.
    Running = 8,
    /// Replay done, waiting for the operator.
    Finished = 9,
    /// Homing before returning to Idle.
    ReturnHome = 10,
}

impl Phase {
    /// Number of phases in one cycle.
    pub const COUNT: u8 = 11;

    /// The phase after this one, wrapping after [`Phase::ReturnHome`].
    pub const fn next(self) -> Self {
        Self::from_index((self as u8 + 1) % Self::COUNT)
    }

    /// Decode a stored phase index. Out-of-range values wrap.
    pub const fn from_index(index: u8) -> Self {
        match index % Self::COUNT {
            0 => Phase::Idle,
            1 => Phase::JogXIn,
            2 => Phase::JogYIn,
            3 => Phase::JogXOut,
            4 => Phase::JogYOut,
            5 => Phase::SpeedMenu,
            6 => Phase::SpeedAdjust,
            7 => Phase::StartMenu,
            8 => Phase::Running,
            9 => Phase::Finished,
            _ => Phase::ReturnHome,
        }
    }

    /// Stored phase index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The axis and waypoint taught in this phase, if it is a jog phase.
    pub const fn teach_target(self) -> Option<(Axis, Waypoint)> {
        match self {
            Phase::JogXIn => Some((Axis::X, Waypoint::In)),
            Phase::JogYIn => Some((Axis::Y, Waypoint::In)),
            Phase::JogXOut => Some((Axis::X, Waypoint::Out)),
            Phase::JogYOut => Some((Axis::Y, Waypoint::Out)),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::JogXIn => "JogXIn",
            Phase::JogYIn => "JogYIn",
            Phase::JogXOut => "JogXOut",
            Phase::JogYOut => "JogYOut",
            Phase::SpeedMenu => "SpeedMenu",
            Phase::SpeedAdjust => "SpeedAdjust",
            Phase::StartMenu => "StartMenu",
            Phase::Running => "Running",
            Phase::Finished => "Finished",
            Phase::ReturnHome => "ReturnHome",
        };
        f.write_str(name)
    }
}
