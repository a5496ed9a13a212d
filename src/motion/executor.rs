//! Synchronized multi-axis execution.
//!
//! Every axis is given a constant speed chosen so that all axes arrive at
//! their targets after the same elapsed time. That time is set by the axis
//! that needs longest at its own maximum speed, so no axis ever exceeds its
//! limit and the combined path is a straight line at constant velocity.

use libm::{copysignf, fabsf};

use crate::config::units::{Steps, StepsPerSec};
use crate::error::{MotionError, Result};
use crate::hal::Clock;
use crate::motor::StepperAxis;

/// Drives `N` axes to a common arrival time.
pub struct SynchronizedMotion<'a, const N: usize> {
    axes: [&'a mut dyn StepperAxis; N],
}

impl<'a, const N: usize> SynchronizedMotion<'a, N> {
    /// Group axes for a synchronized move.
    pub fn new(axes: [&'a mut dyn StepperAxis; N]) -> Self {
        Self { axes }
    }

    /// Plan a move to `targets`, one per axis in construction order.
    ///
    /// Sets each axis's destination and speed. Returns the planned travel
    /// time in seconds, or `None` when every axis is already at its target,
    /// in which case nothing is changed.
    ///
    /// # Errors
    ///
    /// [`MotionError::ZeroMaxSpeed`] if an axis has distance to cover but a
    /// maximum speed of zero. No axis is modified in that case.
    pub fn move_to(&mut self, targets: [Steps; N]) -> Result<Option<f32>> {
        let mut longest_time = 0.0f32;

        for (axis, target) in self.axes.iter().zip(targets.iter()) {
            let distance = target.0 - axis.current_position().0;
            if distance == 0 {
                continue;
            }

            let max_speed = axis.max_speed().0;
            if max_speed <= 0.0 {
                return Err(MotionError::ZeroMaxSpeed { axis: axis.axis() }.into());
            }

            let time = fabsf(distance as f32) / max_speed;
            if time > longest_time {
                longest_time = time;
            }
        }

        if longest_time <= 0.0 {
            return Ok(None);
        }

        for (axis, target) in self.axes.iter_mut().zip(targets.iter()) {
            let distance = target.0 - axis.current_position().0;
            let speed = distance as f32 / longest_time;
            let max_speed = axis.max_speed().0;

            axis.move_to(*target);
            if fabsf(speed) > max_speed {
                axis.set_speed(StepsPerSec(copysignf(max_speed, speed)));
            } else {
                axis.set_speed(StepsPerSec(speed));
            }

            debug!(
                "sync {}: {} -> {} at {} steps/s",
                axis.axis(),
                axis.current_position().0,
                target.0,
                axis.speed().0
            );
        }

        Ok(Some(longest_time))
    }

    /// Give every axis one chance to step.
    ///
    /// Returns whether any axis still has distance to go.
    pub fn run(&mut self, now_us: u64) -> Result<bool> {
        let mut pending = false;
        for axis in self.axes.iter_mut() {
            pending |= axis.run(now_us)?;
        }
        Ok(pending)
    }

    /// Block until every axis has reached its destination.
    pub fn run_to_position<C: Clock + ?Sized>(&mut self, clock: &C) -> Result<()> {
        while self.run(clock.now_us())? {}
        Ok(())
    }

    /// Plan and execute a move in one call.
    pub fn run_to<C: Clock + ?Sized>(&mut self, targets: [Steps; N], clock: &C) -> Result<()> {
        if self.move_to(targets)?.is_some() {
            self.run_to_position(clock)?;
        }
        Ok(())
    }
}
