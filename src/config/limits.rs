//! Soft limit configuration and types.

use serde::Deserialize;

/// Policy for handling limit violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitPolicy {
    /// Truncate the move at the nearest limit.
    #[default]
    Clamp,
    /// Refuse moves that would leave the range.
    Reject,
}

/// Soft limits in steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StepLimits {
    /// Minimum allowed position in steps.
    pub min_steps: i64,
    /// Maximum allowed position in steps.
    pub max_steps: i64,
    /// What to do when a limit is exceeded.
    #[serde(default)]
    pub policy: LimitPolicy,
}

impl StepLimits {
    /// Create new clamping limits.
    pub const fn clamped(min_steps: i64, max_steps: i64) -> Self {
        Self {
            min_steps,
            max_steps,
            policy: LimitPolicy::Clamp,
        }
    }

    /// Check if limits are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min_steps < self.max_steps
    }

    /// Check if a position is within limits.
    pub fn contains(&self, steps: i64) -> bool {
        steps >= self.min_steps && steps <= self.max_steps
    }

    /// Apply limit policy to a target position.
    ///
    /// Returns `Some(steps)` if valid or clamped, `None` if rejected.
    pub fn apply(&self, target: i64) -> Option<i64> {
        if self.contains(target) {
            Some(target)
        } else {
            match self.policy {
                LimitPolicy::Reject => None,
                LimitPolicy::Clamp => {
                    if target < self.min_steps {
                        Some(self.min_steps)
                    } else {
                        Some(self.max_steps)
                    }
                }
            }
        }
    }
}
