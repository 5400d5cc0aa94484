//! Configuration validation.

use crate::coil::MAX_COILS;
use crate::command::MAX_PAYLOAD_LEN;
use crate::error::{ConfigError, Error, Result};

use super::ServoConfig;

/// Validate a servo configuration.
///
/// Checks:
/// - Coil count (if declared) is within `1..=MAX_COILS`
/// - Tick period is positive
/// - Payload bound is within `1..=MAX_PAYLOAD_LEN`
/// - Position limit is positive
pub fn validate_config(config: &ServoConfig) -> Result<()> {
    if let Some(count) = config.coil_count {
        if count == 0 || count > MAX_COILS {
            return Err(Error::Config(ConfigError::InvalidCoilCount(count)));
        }
    }

    if config.tick_period_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidTickPeriod(
            config.tick_period_ms,
        )));
    }

    if config.max_payload_len == 0 || config.max_payload_len > MAX_PAYLOAD_LEN {
        return Err(Error::Config(ConfigError::InvalidPayloadLimit(
            config.max_payload_len,
        )));
    }

    if !config.limits.is_valid() {
        return Err(Error::Config(ConfigError::InvalidPositionLimit(
            config.limits.max_position,
        )));
    }

    Ok(())
}
