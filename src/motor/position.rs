//! Position tracking for stepper axes.

use crate::config::units::Steps;

/// Axis position tracker.
///
/// Holds the absolute position in steps and the destination of the current
/// move. Both are redefined together when the origin moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    /// Current position in steps (from origin)
    steps: Steps,
    /// Destination of the current move
    target: Steps,
}

impl Position {
    /// Create a tracker at the origin with no pending move.
    #[inline]
    pub const fn new() -> Self {
        Self {
            steps: Steps(0),
            target: Steps(0),
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Get the current destination.
    #[inline]
    pub fn target(&self) -> Steps {
        self.target
    }

    /// Set the destination without moving.
    #[inline]
    pub fn set_target(&mut self, target: Steps) {
        self.target = target;
    }

    /// Redefine the present location. Cancels any pending move.
    #[inline]
    pub fn redefine(&mut self, steps: Steps) {
        self.steps = steps;
        self.target = steps;
    }

    /// Move by a number of steps.
    #[inline]
    pub fn move_steps(&mut self, delta: i64) {
        self.steps = Steps(self.steps.0 + delta);
    }

    /// Signed steps remaining to the destination.
    #[inline]
    pub fn distance_to_go(&self) -> i64 {
        self.target.0 - self.steps.0
    }
}
