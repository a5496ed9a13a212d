//! Slider configuration - root configuration structure.
//!
//! Every section has a default matching the reference build, so an empty
//! TOML document yields a working configuration.

use serde::Deserialize;

use super::axis::AxesConfig;
use super::units::{Steps, StepsPerSec};

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Board wiring.
    pub pins: PinMap,
    /// Rail and pan axes.
    pub axes: AxesConfig,
    /// Rail homing against the limit switch.
    pub homing: HomingConfig,
    /// Rotary encoder decoding.
    pub encoder: EncoderConfig,
    /// Encoder push-button.
    pub button: ButtonConfig,
    /// Operator speed setting and replay speeds.
    pub speed: SpeedConfig,
    /// Display geometry and boot splash.
    pub display: DisplayConfig,
}

/// Pin numbers of the board wiring.
///
/// The library never touches pins by number; the HAL layer reads this map
/// when it constructs the embedded-hal pin objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PinMap {
    /// Rail STEP output.
    pub x_step: u8,
    /// Rail DIR output.
    pub x_dir: u8,
    /// Pan STEP output.
    pub y_step: u8,
    /// Pan DIR output.
    pub y_dir: u8,
    /// Rail home switch input.
    pub limit_switch: u8,
    /// Encoder clock line. Rising-edge interrupt for `settle_delay`, both
    /// edges for `edge_compare`.
    pub encoder_clk: u8,
    /// Encoder data line.
    pub encoder_dt: u8,
    /// Encoder push-button (rising-edge interrupt).
    pub encoder_sw: u8,
    /// Display reset output.
    pub display_reset: u8,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            x_step: 7,
            x_dir: 4,
            y_step: 6,
            y_dir: 5,
            limit_switch: 11,
            encoder_clk: 3,
            encoder_dt: 9,
            encoder_sw: 2,
            display_reset: 4,
        }
    }
}

/// Rail homing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HomingConfig {
    /// Step rate magnitude while seeking the switch and backing off.
    #[serde(rename = "speed_steps_per_sec")]
    pub speed: StepsPerSec,
    /// Distance moved off the switch after it trips.
    #[serde(rename = "backoff_steps")]
    pub backoff: Steps,
    /// Pause after the switch trips before redefining zero.
    pub settle_ms: u32,
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            speed: StepsPerSec(900.0),
            backoff: Steps(200),
            settle_ms: 20,
        }
    }
}

/// How encoder contact bounce is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum DebounceStrategy {
    /// Accept a clock edge only when the previous sampled clock level was
    /// low and the current one is high. Needs the clock sampled on both
    /// edges.
    EdgeCompare,
    /// Wait `settle_ms`, then accept only if the clock line is still high.
    #[default]
    SettleDelay,
}

/// Rotary encoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Debounce strategy.
    pub debounce: DebounceStrategy,
    /// Settle time for [`DebounceStrategy::SettleDelay`].
    pub settle_ms: u32,
}

impl EncoderConfig {
    /// Default settings, usable in `const` contexts such as a `static`
    /// [`EncoderInput`](crate::input::EncoderInput).
    pub const DEFAULT: Self = Self {
        debounce: DebounceStrategy::SettleDelay,
        settle_ms: 5,
    };
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Push-button configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Minimum spacing between accepted presses.
    pub debounce_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

/// Operator speed setting and replay speeds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Setting restored every time the slider returns to Idle (steps/s).
    pub default_setting: u32,
    /// Change per encoder detent (steps/s).
    pub increment: u32,
    /// Rail steps per millimetre of carriage travel.
    pub steps_per_mm: f32,
    /// Per-axis maximum speed for the preview move to the in waypoints.
    #[serde(rename = "preview_max_speed_steps_per_sec")]
    pub preview_max_speed: StepsPerSec,
    /// Pan axis maximum speed during the replay move.
    #[serde(rename = "run_y_max_speed_steps_per_sec")]
    pub run_y_max_speed: StepsPerSec,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            default_setting: 200,
            increment: 30,
            steps_per_mm: 80.0,
            preview_max_speed: StepsPerSec(800.0),
            run_y_max_speed: StepsPerSec(800.0),
        }
    }
}

/// Display geometry and boot splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Bitmap width in pixels.
    pub width: u16,
    /// Bitmap height in pixels.
    pub height: u16,
    /// How long the boot splash stays up.
    pub splash_ms: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 128,
            splash_ms: 2000,
        }
    }
}
