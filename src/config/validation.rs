//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::motion::Axis;

use super::{AxisConfig, SliderConfig};

/// Validate a slider configuration.
///
/// Checks:
/// - Axis speeds and jog increments are positive
/// - Soft limits are valid (min < max)
/// - Homing speed, speed scale and speed increment are positive
/// - The button debounce window is non-zero
pub fn validate_config(config: &SliderConfig) -> Result<()> {
    validate_axis(Axis::X, &config.axes.x)?;
    validate_axis(Axis::Y, &config.axes.y)?;

    if config.homing.speed.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidHomingSpeed(
            config.homing.speed.0,
        )));
    }

    if config.speed.steps_per_mm <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidSpeedScale(
            config.speed.steps_per_mm,
        )));
    }

    if config.speed.increment == 0 {
        return Err(Error::Config(ConfigError::InvalidSpeedIncrement(0)));
    }

    if config.speed.preview_max_speed.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidMaxSpeed {
            axis: Axis::X,
            value: config.speed.preview_max_speed.0,
        }));
    }

    if config.speed.run_y_max_speed.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidMaxSpeed {
            axis: Axis::Y,
            value: config.speed.run_y_max_speed.0,
        }));
    }

    if config.button.debounce_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidDebounceWindow(0)));
    }

    Ok(())
}

fn validate_axis(axis: Axis, config: &AxisConfig) -> Result<()> {
    if config.max_speed.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidMaxSpeed {
            axis,
            value: config.max_speed.0,
        }));
    }

    if config.jog_increment.0 <= 0 {
        return Err(Error::Config(ConfigError::InvalidJogIncrement {
            axis,
            value: config.jog_increment.0,
        }));
    }

    if config.jog_speed.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidJogSpeed {
            axis,
            value: config.jog_speed.0,
        }));
    }

    if let Some(ref limits) = config.limits {
        if !limits.is_valid() {
            return Err(Error::Config(ConfigError::InvalidSoftLimits {
                min: limits.min_steps,
                max: limits.max_steps,
            }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Steps, StepsPerSec};
    use crate::config::StepLimits;

    #[test]
    fn test_reference_config_is_valid() {
        assert!(validate_config(&SliderConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_jog_increment() {
        let mut config = SliderConfig::default();
        config.axes.y.jog_increment = Steps(0);

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidJogIncrement { axis: Axis::Y, .. }))
        ));
    }

    #[test]
    fn test_negative_max_speed() {
        let mut config = SliderConfig::default();
        config.axes.x.max_speed = StepsPerSec(-1.0);

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidMaxSpeed { axis: Axis::X, .. }))
        ));
    }

    #[test]
    fn test_inverted_limits() {
        let mut config = SliderConfig::default();
        config.axes.x.limits = Some(StepLimits::clamped(61_000, 0));

        let result = validate_config(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSoftLimits { min: 61_000, max: 0 }))
        ));
    }

    #[test]
    fn test_zero_debounce_window() {
        let mut config = SliderConfig::default();
        config.button.debounce_ms = 0;

        assert!(validate_config(&config).is_err());
    }
}
