//! Error types for cam-slider.
//!
//! Physical-limit policies (jog clamping, speed floor, zero-speed estimates)
//! are handled in place and never surface here. What remains are
//! configuration faults, pin faults, display faults and moves that could
//! never arrive.

use core::fmt;

use crate::motion::Axis;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all cam-slider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor or input pin error
    Motor(MotorError),
    /// Synchronized motion error
    Motion(MotionError),
    /// Display collaborator error
    Display(DisplayError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A required builder field was never set
    MissingField(&'static str),
    /// Axis maximum speed must be > 0
    InvalidMaxSpeed {
        /// Offending axis
        axis: Axis,
        /// Configured value in steps/s
        value: f32,
    },
    /// Invalid soft limits (min must be < max)
    InvalidSoftLimits {
        /// Minimum limit value
        min: i64,
        /// Maximum limit value
        max: i64,
    },
    /// Jog increment must be > 0
    InvalidJogIncrement {
        /// Offending axis
        axis: Axis,
        /// Configured value in steps
        value: i64,
    },
    /// Jog speed must be > 0
    InvalidJogSpeed {
        /// Offending axis
        axis: Axis,
        /// Configured value in steps/s
        value: f32,
    },
    /// Steps-per-millimetre scale must be > 0
    InvalidSpeedScale(f32),
    /// Speed setting increment must be > 0
    InvalidSpeedIncrement(u32),
    /// Homing speed must be > 0
    InvalidHomingSpeed(f32),
    /// Button debounce window must be > 0 ms
    InvalidDebounceWindow(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor and input pin errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
}

/// Synchronized motion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// Axis has distance to cover but a maximum speed of zero
    ZeroMaxSpeed {
        /// Axis that can never arrive
        axis: Axis,
    },
}

/// Display collaborator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The driver rejected a drawing or flush command
    DriverError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Display(e) => write!(f, "Display error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            ConfigError::InvalidMaxSpeed { axis, value } => {
                write!(f, "Invalid max speed for {} axis: {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidSoftLimits { min, max } => {
                write!(f, "Invalid soft limits: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidJogIncrement { axis, value } => {
                write!(f, "Invalid jog increment for {} axis: {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidJogSpeed { axis, value } => {
                write!(f, "Invalid jog speed for {} axis: {}. Must be > 0", axis, value)
            }
            ConfigError::InvalidSpeedScale(v) => {
                write!(f, "Invalid steps per mm: {}. Must be > 0", v)
            }
            ConfigError::InvalidSpeedIncrement(v) => {
                write!(f, "Invalid speed increment: {}. Must be > 0", v)
            }
            ConfigError::InvalidHomingSpeed(v) => {
                write!(f, "Invalid homing speed: {}. Must be > 0", v)
            }
            ConfigError::InvalidDebounceWindow(v) => {
                write!(f, "Invalid button debounce window: {} ms. Must be > 0", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::ZeroMaxSpeed { axis } => {
                write!(f, "{} axis has distance to go but a max speed of zero", axis)
            }
        }
    }
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::DriverError => write!(f, "display driver command failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}
