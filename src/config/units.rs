//! Unit types for physical quantities.
//!
//! Keep step counts, step rates and carriage speeds apart at compile time.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Axis position in steps (absolute from origin).
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Signed step rate in steps per second. The sign encodes direction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct StepsPerSec(pub f32);

impl StepsPerSec {
    /// Create a new StepsPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Magnitude of the rate.
    #[inline]
    pub fn abs(self) -> Self {
        Self(libm::fabsf(self.0))
    }

    /// Step interval in microseconds, `None` for a zero rate.
    #[inline]
    pub fn interval_us(self) -> Option<u64> {
        let magnitude = libm::fabsf(self.0);
        if magnitude > 0.0 {
            Some((1_000_000.0 / magnitude) as u64)
        } else {
            None
        }
    }
}

impl Neg for StepsPerSec {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Carriage speed in millimetres per second (operator-facing).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillimetersPerSec(pub f32);

impl MillimetersPerSec {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert a step rate using a steps-per-millimetre scale.
    #[inline]
    pub fn from_steps_per_sec(rate: StepsPerSec, steps_per_mm: f32) -> Self {
        Self(rate.0 / steps_per_mm)
    }
}
