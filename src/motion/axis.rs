//! Axis identity and direction of travel.

use core::fmt;

/// One independently actuated degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Linear rail, homed against the limit switch.
    X,
    /// Pan head, zeroed in software.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Direction of axis travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing step count.
    Positive,
    /// Decreasing step count.
    Negative,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get direction from a signed step rate.
    #[inline]
    pub fn from_rate(rate: f32) -> Self {
        if rate >= 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_signs() {
        assert_eq!(Direction::from_steps(0), Direction::Positive);
        assert_eq!(Direction::from_steps(-3), Direction::Negative);
        assert_eq!(Direction::from_rate(-0.5), Direction::Negative);
        assert_eq!(Direction::Negative.sign(), -1);
        assert_eq!(Direction::Positive.reversed(), Direction::Negative);
    }
}
