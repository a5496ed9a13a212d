//! Per-axis configuration from TOML.

use serde::Deserialize;

use super::limits::StepLimits;
use super::units::{Steps, StepsPerSec};

/// Complete configuration of one slider axis.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisConfig {
    /// Hard maximum step rate.
    #[serde(rename = "max_speed_steps_per_sec")]
    pub max_speed: StepsPerSec,

    /// Distance moved per encoder detent while teaching.
    #[serde(rename = "jog_increment_steps")]
    pub jog_increment: Steps,

    /// Step rate used for jog sub-moves.
    #[serde(rename = "jog_speed_steps_per_sec")]
    pub jog_speed: StepsPerSec,

    /// Reverse the encoder-to-axis direction mapping.
    #[serde(default)]
    pub invert_jog: bool,

    /// Optional soft limits applied to jog moves.
    #[serde(default)]
    pub limits: Option<StepLimits>,
}

impl AxisConfig {
    /// Rail axis of the reference build: 500-step jog inside `[0, 61000]`.
    pub fn rail() -> Self {
        Self {
            max_speed: StepsPerSec(1000.0),
            jog_increment: Steps(500),
            jog_speed: StepsPerSec(300.0),
            invert_jog: false,
            limits: Some(StepLimits::clamped(0, 61_000)),
        }
    }

    /// Pan axis of the reference build: 25-step jog, no soft limits,
    /// clockwise detents move toward negative positions.
    pub fn pan() -> Self {
        Self {
            max_speed: StepsPerSec(1000.0),
            jog_increment: Steps(25),
            jog_speed: StepsPerSec(100.0),
            invert_jog: true,
            limits: None,
        }
    }
}

/// Both axes of the slider.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Rail axis, homed against the limit switch.
    pub x: AxisConfig,
    /// Pan axis, zeroed in software while teaching.
    pub y: AxisConfig,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            x: AxisConfig::rail(),
            y: AxisConfig::pan(),
        }
    }
}
