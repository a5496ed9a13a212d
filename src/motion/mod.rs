//! Motion module for cam-slider.
//!
//! Axis identity, direction of travel and synchronized multi-axis moves.

mod axis;
mod executor;

pub use axis::{Axis, Direction};
pub use executor::SynchronizedMotion;
