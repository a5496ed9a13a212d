//! Motor module for cam-slider.
//!
//! Provides the per-axis stepper driver with position tracking.

mod builder;
mod driver;
mod position;

pub use builder::AxisDriveBuilder;
pub use driver::{AxisDrive, StepperAxis};
pub use position::Position;
