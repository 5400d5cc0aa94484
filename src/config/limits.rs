//! Position limit configuration.

use serde::Deserialize;

use crate::error::CommandError;

/// Policy for handling destinations outside the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitPolicy {
    /// Reject destinations that exceed limits.
    #[default]
    Reject,
    /// Clamp destination to nearest limit.
    Clamp,
}

/// Accepted destination range, `0..=max_position` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PositionLimits {
    /// Largest accepted destination in steps.
    #[serde(default = "default_max_position")]
    pub max_position: u32,

    /// What to do when a destination is out of range.
    #[serde(default)]
    pub policy: LimitPolicy,
}

fn default_max_position() -> u32 {
    u32::MAX
}

impl Default for PositionLimits {
    fn default() -> Self {
        Self {
            max_position: default_max_position(),
            policy: LimitPolicy::Reject,
        }
    }
}

impl PositionLimits {
    /// Create new position limits.
    pub fn new(max_position: u32, policy: LimitPolicy) -> Self {
        Self {
            max_position,
            policy,
        }
    }

    /// Check if limits are valid (max > 0).
    pub fn is_valid(&self) -> bool {
        self.max_position > 0
    }

    /// Check if a parsed destination is within limits.
    pub fn contains(&self, value: i64) -> bool {
        value >= 0 && value <= i64::from(self.max_position)
    }

    /// Apply limit policy to a parsed destination.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::OutOfRange`] when the value is outside the
    /// limits and the policy is [`LimitPolicy::Reject`].
    pub fn apply(&self, value: i64) -> Result<u32, CommandError> {
        if self.contains(value) {
            // contains() guarantees the value fits
            return Ok(value as u32);
        }

        match self.policy {
            LimitPolicy::Reject => Err(CommandError::OutOfRange {
                value,
                max: self.max_position,
            }),
            LimitPolicy::Clamp => {
                if value < 0 {
                    Ok(0)
                } else {
                    Ok(self.max_position)
                }
            }
        }
    }
}
