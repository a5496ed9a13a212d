//! Unit tests for configuration validation.

use cam_slider::config::units::{Steps, StepsPerSec};
use cam_slider::config::{validate_config, SliderConfig, StepLimits};
use cam_slider::error::{ConfigError, Error};
use cam_slider::Axis;

/// Test validation of the default configuration.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&SliderConfig::default()).is_ok());
}

/// Test validation fails for a zero axis speed.
#[test]
fn test_zero_axis_max_speed() {
    let mut config = SliderConfig::default();
    config.axes.y.max_speed = StepsPerSec(0.0);

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMaxSpeed { axis: Axis::Y, .. }))
    ));
}

/// Test validation fails for a non-positive jog increment.
#[test]
fn test_negative_jog_increment() {
    let mut config = SliderConfig::default();
    config.axes.x.jog_increment = Steps(-500);

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidJogIncrement {
            axis: Axis::X,
            value: -500
        }))
    ));
}

/// Test validation fails for inverted soft limits.
#[test]
fn test_inverted_soft_limits() {
    let mut config = SliderConfig::default();
    config.axes.x.limits = Some(StepLimits::clamped(61_000, 0));

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidSoftLimits {
            min: 61_000,
            max: 0
        }))
    ));
}

/// Test validation fails for a zero homing speed.
#[test]
fn test_zero_homing_speed() {
    let mut config = SliderConfig::default();
    config.homing.speed = StepsPerSec(0.0);

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidHomingSpeed(_)))
    ));
}

/// Test validation fails for a zero steps-per-millimetre scale.
#[test]
fn test_zero_speed_scale() {
    let mut config = SliderConfig::default();
    config.speed.steps_per_mm = 0.0;

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidSpeedScale(_)))
    ));
}

/// Test validation fails for a zero debounce window.
#[test]
fn test_zero_debounce_window() {
    let mut config = SliderConfig::default();
    config.button.debounce_ms = 0;

    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidDebounceWindow(0)))
    ));
}

/// Test that a zero default speed setting is allowed: it is the floor the
/// operator can dial down to anyway.
#[test]
fn test_zero_default_setting_allowed() {
    let mut config = SliderConfig::default();
    config.speed.default_setting = 0;

    assert!(validate_config(&config).is_ok());
}
