//! Builder pattern for AxisDrive.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::StepsPerSec;
use crate::config::AxisConfig;
use crate::error::{ConfigError, Error, Result};
use crate::motion::Axis;

use super::driver::AxisDrive;

/// Builder for creating AxisDrive instances.
pub struct AxisDriveBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    delay: Option<DELAY>,
    axis: Option<Axis>,
    max_speed: Option<StepsPerSec>,
    invert_direction: bool,
}

impl<STEP, DIR, DELAY> Default for AxisDriveBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY> AxisDriveBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            delay: None,
            axis: None,
            max_speed: None,
            invert_direction: false,
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set which axis the drive moves.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    /// Set the hard maximum step rate.
    pub fn max_speed(mut self, max_speed: StepsPerSec) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Configure from an AxisConfig.
    pub fn from_axis_config(mut self, axis: Axis, config: &AxisConfig) -> Self {
        self.axis = Some(axis);
        self.max_speed = Some(config.max_speed);
        self
    }

    /// Build the AxisDrive.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<AxisDrive<STEP, DIR, DELAY>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingField("step_pin")))?;

        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        let axis = self
            .axis
            .ok_or(Error::Config(ConfigError::MissingField("axis")))?;

        let max_speed = self
            .max_speed
            .ok_or(Error::Config(ConfigError::MissingField("max_speed")))?;

        Ok(AxisDrive::new(
            step_pin,
            dir_pin,
            delay,
            axis,
            max_speed,
            self.invert_direction,
        ))
    }
}
