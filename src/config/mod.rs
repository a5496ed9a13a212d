//! Configuration module for cam-slider.
//!
//! One parameterized [`SliderConfig`] covers every hardware variant of the
//! slider: pin map, axis speeds and jog increments, display geometry and the
//! encoder debounce strategy. It can be built in code or loaded from TOML
//! (with the `std` feature).

mod axis;
mod limits;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::{AxesConfig, AxisConfig};
pub use limits::{LimitPolicy, StepLimits};
pub use system::{
    ButtonConfig, DebounceStrategy, DisplayConfig, EncoderConfig, HomingConfig, PinMap,
    SliderConfig, SpeedConfig,
};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{MillimetersPerSec, Steps, StepsPerSec};
