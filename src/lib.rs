//! # cam-slider
//!
//! Motion control for a two-axis motorized camera slider, with embedded-hal
//! 1.0 support.
//!
//! ## Features
//!
//! - **Teach-in**: jog the rail and pan axes with a rotary encoder and
//!   record an in and an out waypoint for each
//! - **Synchronized replay**: both axes travel at constant speed and arrive
//!   together
//! - **Interrupt-safe inputs**: encoder and button state live in atomics
//!   shared with interrupt handlers
//! - **Configuration-driven**: pins, speeds and limits from TOML files
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cam_slider::{
//!     AxisDriveBuilder, ButtonInput, EncoderInput, SliderConfig, SliderController,
//!     SliderHardware, SliderInputs, SplashArt,
//! };
//!
//! static ENCODER: EncoderInput = EncoderInput::new(EncoderConfig::DEFAULT);
//! static BUTTON: ButtonInput = ButtonInput::new(500);
//!
//! // The controller applies the [encoder] and [button] sections to the
//! // statics, so their const settings are only the boot-time values.
//! let config: SliderConfig = cam_slider::load_config("slider.toml")?;
//!
//! let x = AxisDriveBuilder::new()
//!     .from_axis_config(Axis::X, &config.axes.x)
//!     .step_pin(x_step)
//!     .dir_pin(x_dir)
//!     .delay(delay.clone())
//!     .build()?;
//!
//! let mut slider = SliderController::new(config, hardware, inputs, art);
//! slider.start()?;
//! loop {
//!     slider.poll()?;
//! }
//! ```
//!
//! ## Targets
//!
//! [`ButtonInput`] changes the phase with atomic read-modify-write
//! operations on `AtomicU8`, and [`EncoderInput`] takes turns with
//! `AtomicU8::swap`. Targets without atomic compare-and-swap, such as
//! `thumbv6m-none-eabi` and AVR, are not supported.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

// Must come first so the logging macros are visible everywhere
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod hal;
pub mod input;
pub mod motion;
pub mod motor;
pub mod planner;
pub mod teach;

// Re-exports for ergonomic API
pub use config::{validate_config, AxisConfig, SliderConfig};
pub use controller::{SliderController, SliderHardware, SliderInputs};
pub use display::{Display, SplashArt};
pub use error::{Error, Result};
pub use hal::Clock;
pub use input::{ButtonInput, EncoderInput, Phase, Rotation};
pub use motion::{Axis, Direction, SynchronizedMotion};
pub use motor::{AxisDrive, AxisDriveBuilder, StepperAxis};
pub use planner::{SpeedPlanner, TravelEstimate};
pub use teach::{JogController, Waypoint, WaypointPair};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{MillimetersPerSec, Steps, StepsPerSec};
