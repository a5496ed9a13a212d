//! Encoder-driven jogging of one axis.

use crate::config::units::{Steps, StepsPerSec};
use crate::config::{AxisConfig, StepLimits};
use crate::error::Result;
use crate::hal::Clock;
use crate::input::{EncoderInput, Rotation};
use crate::motion::Direction;
use crate::motor::StepperAxis;

/// Turns encoder detents into fixed-size moves of one axis.
#[derive(Debug, Clone)]
pub struct JogController {
    increment: i64,
    speed: StepsPerSec,
    max_speed: StepsPerSec,
    invert: bool,
    limits: Option<StepLimits>,
}

impl JogController {
    /// Build from an axis configuration.
    pub fn from_config(config: &AxisConfig) -> Self {
        Self {
            increment: config.jog_increment.0,
            speed: config.jog_speed,
            max_speed: config.max_speed,
            invert: config.invert_jog,
            limits: config.limits,
        }
    }

    /// Step distance per detent.
    #[inline]
    pub fn increment(&self) -> Steps {
        Steps(self.increment)
    }

    /// Where one detent of `rotation` takes an axis sitting at `current`.
    ///
    /// Moves that would cross a soft limit land exactly on it. With a
    /// rejecting limit policy the axis stays where it is.
    pub fn jog_target(&self, current: Steps, rotation: Rotation) -> Steps {
        let direction = match rotation {
            Rotation::Clockwise => Direction::Positive,
            Rotation::CounterClockwise => Direction::Negative,
        };
        let direction = if self.invert {
            direction.reversed()
        } else {
            direction
        };

        let wanted = current.0 + direction.sign() * self.increment;
        match &self.limits {
            Some(limits) => Steps(limits.apply(wanted).unwrap_or(current.0)),
            None => Steps(wanted),
        }
    }

    /// Consume at most one pending detent and move `axis` accordingly,
    /// blocking until the sub-move completes.
    ///
    /// Returns the new position if a detent was consumed.
    pub fn poll<A, C>(
        &self,
        axis: &mut A,
        encoder: &EncoderInput,
        clock: &C,
    ) -> Result<Option<Steps>>
    where
        A: StepperAxis,
        C: Clock + ?Sized,
    {
        let rotation = match encoder.try_take_turn() {
            Some(rotation) => rotation,
            None => return Ok(None),
        };

        let current = axis.current_position();
        let target = self.jog_target(current, rotation);
        if (target.0 - current.0).abs() != self.increment {
            debug!("jog {} clamped at {}", axis.axis(), target.0);
        }

        axis.set_max_speed(self.max_speed);
        axis.run_to_position(target, self.speed, clock)?;

        debug!("jog {}: {} -> {}", axis.axis(), current.0, target.0);
        Ok(Some(axis.current_position()))
    }
}
