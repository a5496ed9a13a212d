//! Stepper axis driver.
//!
//! Generic over embedded-hal 1.0 pin types. Motion is constant-speed and
//! time-scheduled: every call to [`AxisDrive::run`] emits at most one STEP
//! pulse, and only once the step interval for the current speed has elapsed
//! since the previous pulse.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::{Steps, StepsPerSec};
use crate::error::{MotorError, Result};
use crate::hal::Clock;
use crate::motion::{Axis, Direction};

use super::position::Position;

/// STEP pulse width in microseconds.
const PULSE_WIDTH_US: u32 = 2;

/// One independently driven axis.
///
/// This is the contract the multi-axis executor, jog controller and homing
/// procedure work against. [`AxisDrive`] is the hardware implementation.
pub trait StepperAxis {
    /// Which axis this is.
    fn axis(&self) -> Axis;

    /// Tracked absolute position.
    fn current_position(&self) -> Steps;

    /// Redefine the present physical location as `position`.
    ///
    /// Cancels any pending move.
    fn set_current_position(&mut self, position: Steps);

    /// Set an absolute destination without blocking.
    fn move_to(&mut self, target: Steps);

    /// Signed steps remaining to the destination.
    fn distance_to_go(&self) -> i64;

    /// Set the hard maximum step rate (magnitude).
    fn set_max_speed(&mut self, max_speed: StepsPerSec);

    /// Hard maximum step rate.
    fn max_speed(&self) -> StepsPerSec;

    /// Set the signed step rate, clamped to the maximum.
    ///
    /// Keeps the current destination.
    fn set_speed(&mut self, speed: StepsPerSec);

    /// Most recently set signed step rate.
    fn speed(&self) -> StepsPerSec;

    /// Step at most once toward the destination.
    ///
    /// Returns whether motion is still pending.
    fn run(&mut self, now_us: u64) -> Result<bool>;

    /// Step at most once in the direction of the speed sign, ignoring the
    /// destination.
    ///
    /// Returns whether a step was taken.
    fn run_speed(&mut self, now_us: u64) -> Result<bool>;

    /// Drive to `target` at `speed` and block until it is reached.
    fn run_to_position<C>(&mut self, target: Steps, speed: StepsPerSec, clock: &C) -> Result<()>
    where
        Self: Sized,
        C: Clock + ?Sized,
    {
        self.move_to(target);
        self.set_speed(speed);
        while self.run(clock.now_us())? {}
        Ok(())
    }
}

/// Stepper axis driver over STEP/DIR pins.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider for the STEP pulse width (must implement `DelayNs`)
pub struct AxisDrive<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (high = positive, low = negative, or inverted).
    dir_pin: DIR,

    /// Delay provider for the pulse width.
    delay: DELAY,

    /// Which axis this drive moves.
    axis: Axis,

    /// Current absolute position and destination.
    position: Position,

    /// Signed step rate.
    speed: StepsPerSec,

    /// Hard maximum step rate.
    max_speed: StepsPerSec,

    /// Timestamp of the last STEP pulse.
    last_step_us: Option<u64>,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,
}

impl<STEP, DIR, DELAY> AxisDrive<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a drive at position zero with no pending move.
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        axis: Axis,
        max_speed: StepsPerSec,
        invert_direction: bool,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            delay,
            axis,
            position: Position::new(),
            speed: StepsPerSec(0.0),
            max_speed: max_speed.abs(),
            last_step_us: None,
            current_direction: None,
            invert_direction,
        }
    }

    /// Get the current destination.
    #[inline]
    pub fn target_position(&self) -> Steps {
        self.position.target()
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    fn is_due(&self, now_us: u64) -> Option<Direction> {
        let interval = self.speed.interval_us()?;
        let due = match self.last_step_us {
            Some(last) => now_us.saturating_sub(last) >= interval,
            None => true,
        };
        if due {
            Some(Direction::from_rate(self.speed.0))
        } else {
            None
        }
    }

    fn step(&mut self, direction: Direction, now_us: u64) -> Result<()> {
        self.set_direction(direction)?;

        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(PULSE_WIDTH_US);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;

        self.position.move_steps(direction.sign());
        self.last_step_us = Some(now_us);
        Ok(())
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.current_direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Positive => !self.invert_direction,
            Direction::Negative => self.invert_direction,
        };

        if pin_high {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.current_direction = Some(direction);
        Ok(())
    }
}

impl<STEP, DIR, DELAY> StepperAxis for AxisDrive<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    #[inline]
    fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    fn current_position(&self) -> Steps {
        self.position.steps()
    }

    fn set_current_position(&mut self, position: Steps) {
        self.position.redefine(position);
        self.speed = StepsPerSec(0.0);
    }

    #[inline]
    fn move_to(&mut self, target: Steps) {
        self.position.set_target(target);
    }

    #[inline]
    fn distance_to_go(&self) -> i64 {
        self.position.distance_to_go()
    }

    fn set_max_speed(&mut self, max_speed: StepsPerSec) {
        self.max_speed = max_speed.abs();
        // Re-apply the clamp to the current speed
        let speed = self.speed;
        self.set_speed(speed);
    }

    #[inline]
    fn max_speed(&self) -> StepsPerSec {
        self.max_speed
    }

    fn set_speed(&mut self, speed: StepsPerSec) {
        let limit = self.max_speed.0;
        self.speed = StepsPerSec(speed.0.clamp(-limit, limit));
    }

    #[inline]
    fn speed(&self) -> StepsPerSec {
        self.speed
    }

    fn run(&mut self, now_us: u64) -> Result<bool> {
        let remaining = self.position.distance_to_go();
        if remaining == 0 {
            return Ok(false);
        }

        // The destination decides the direction; the speed only sets the pace
        let toward = Direction::from_steps(remaining);
        if self.is_due(now_us).is_some() {
            self.step(toward, now_us)?;
        }

        Ok(self.position.distance_to_go() != 0)
    }

    fn run_speed(&mut self, now_us: u64) -> Result<bool> {
        match self.is_due(now_us) {
            Some(direction) => {
                self.step(direction, now_us)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
