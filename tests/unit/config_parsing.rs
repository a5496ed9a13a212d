//! Unit tests for TOML configuration parsing.

use cam_slider::config::{
    load_config, parse_config, DebounceStrategy, LimitPolicy, SliderConfig,
};
use cam_slider::config::units::{Steps, StepsPerSec};
use cam_slider::error::{ConfigError, Error};

/// Reference build written out in full.
const REFERENCE_CONFIG: &str = r#"
[pins]
x_step = 7
x_dir = 4
y_step = 6
y_dir = 5
limit_switch = 11
encoder_clk = 3
encoder_dt = 9
encoder_sw = 2
display_reset = 4

[axes.x]
max_speed_steps_per_sec = 1000.0
jog_increment_steps = 500
jog_speed_steps_per_sec = 300.0
limits = { min_steps = 0, max_steps = 61000, policy = "clamp" }

[axes.y]
max_speed_steps_per_sec = 1000.0
jog_increment_steps = 25
jog_speed_steps_per_sec = 100.0
invert_jog = true

[homing]
speed_steps_per_sec = 900.0
backoff_steps = 200
settle_ms = 20

[encoder]
debounce = "settle_delay"
settle_ms = 5

[button]
debounce_ms = 500

[speed]
default_setting = 200
increment = 30
steps_per_mm = 80.0
preview_max_speed_steps_per_sec = 800.0
run_y_max_speed_steps_per_sec = 800.0

[display]
width = 256
height = 128
splash_ms = 2000
"#;

/// Test that the fully written-out reference build equals the defaults.
#[test]
fn test_reference_config_matches_defaults() {
    let config = parse_config(REFERENCE_CONFIG).expect("Failed to parse TOML");
    assert_eq!(config, SliderConfig::default());
}

/// Test parsing the rail soft limits.
#[test]
fn test_parse_rail_limits() {
    let config = parse_config(REFERENCE_CONFIG).expect("Failed to parse TOML");
    let limits = config.axes.x.limits.expect("rail should have limits");

    assert_eq!(limits.min_steps, 0);
    assert_eq!(limits.max_steps, 61_000);
    assert_eq!(limits.policy, LimitPolicy::Clamp);
    assert!(config.axes.y.limits.is_none());
}

/// Test overriding a single axis leaves the other at its default.
#[test]
fn test_partial_axes_section() {
    let toml_str = r#"
[axes.y]
max_speed_steps_per_sec = 600.0
jog_increment_steps = 100
jog_speed_steps_per_sec = 200.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.axes.y.jog_increment, Steps(100));
    assert_eq!(config.axes.y.max_speed, StepsPerSec(600.0));
    assert!(!config.axes.y.invert_jog);
    assert_eq!(config.axes.x.jog_increment, Steps(500));
}

/// Test parsing both encoder debounce variants.
#[test]
fn test_parse_encoder_debounce_variants() {
    let toml_str = r#"
[encoder]
debounce = "settle_delay"
settle_ms = 10
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.encoder.debounce, DebounceStrategy::SettleDelay);
    assert_eq!(config.encoder.settle_ms, 10);

    let config = parse_config("[encoder]\ndebounce = \"edge_compare\"\n")
        .expect("Failed to parse TOML");
    assert_eq!(config.encoder.debounce, DebounceStrategy::EdgeCompare);
    assert_eq!(config.encoder.settle_ms, 5);
}

/// Test that an unknown debounce strategy is a parse error.
#[test]
fn test_unknown_debounce_strategy() {
    let toml_str = r#"
[encoder]
debounce = "majority_vote"
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("cam-slider-{}.toml", std::process::id()));
    std::fs::write(&path, "[speed]\ndefault_setting = 350\n").expect("write temp config");

    let config = load_config(&path).expect("Failed to load config");
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.speed.default_setting, 350);
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/cam-slider.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
