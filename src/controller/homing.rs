//! Rail homing against the limit switch.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::units::{Steps, StepsPerSec};
use crate::config::HomingConfig;
use crate::error::{MotorError, Result};
use crate::hal::Clock;
use crate::motor::StepperAxis;

/// Whether the rail is away from home. The switch input is pulled up and
/// reads low once the carriage presses it.
pub fn away_from_home<L: InputPin>(limit: &mut L) -> Result<bool> {
    limit.is_high().map_err(|_| MotorError::PinError.into())
}

/// Seek the limit switch, back off and define home as zero.
///
/// Drives `axis` toward negative positions at the homing speed until the
/// switch reads home, waits for the carriage to settle, zeroes the
/// position, moves out by the backoff distance and zeroes again. If the
/// switch is already pressed the seek is skipped.
///
/// There is no timeout: a switch that never closes keeps the axis moving.
pub fn home_axis<A, L, C, D>(
    axis: &mut A,
    limit: &mut L,
    config: &HomingConfig,
    max_speed: StepsPerSec,
    clock: &C,
    delay: &mut D,
) -> Result<()>
where
    A: StepperAxis,
    L: InputPin,
    C: Clock + ?Sized,
    D: DelayNs,
{
    axis.set_max_speed(max_speed);
    axis.set_speed(-config.speed.abs());

    let mut seek_steps: u64 = 0;
    while away_from_home(limit)? {
        if axis.run_speed(clock.now_us())? {
            seek_steps += 1;
        }
    }
    debug!("home switch reached after {} steps", seek_steps);

    delay.delay_ms(config.settle_ms);
    axis.set_current_position(Steps(0));

    axis.run_to_position(config.backoff, config.speed.abs(), clock)?;
    axis.set_current_position(Steps(0));

    info!("{} homed, backed off {} steps", axis.axis(), config.backoff.0);
    Ok(())
}
