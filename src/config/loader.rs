//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::ServoConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use coil_servo::load_config;
///
/// let config = load_config("servo.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServoConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<ServoConfig> {
    let config: ServoConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BusyPolicy, LimitPolicy};

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.tick_period_ms, 100);
        assert_eq!(config.limits.max_position, u32::MAX);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
name = "dial"
coil_count = 4
tick_period_ms = 50
startup_delay_ms = 0
max_payload_len = 6
detector_active_low = true
busy_policy = "reject"

[limits]
max_position = 360
policy = "clamp"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.name.as_str(), "dial");
        assert_eq!(config.coil_count, Some(4));
        assert_eq!(config.tick_period_ms, 50);
        assert_eq!(config.startup_delay_ms, 0);
        assert_eq!(config.max_payload_len, 6);
        assert!(config.detector_active_low);
        assert_eq!(config.busy_policy, BusyPolicy::Reject);
        assert_eq!(config.limits.max_position, 360);
        assert_eq!(config.limits.policy, LimitPolicy::Clamp);
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let result = parse_config(r#"busy_policy = "queue""#);
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_parse_runs_validation() {
        let result = parse_config("tick_period_ms = 0");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidTickPeriod(0)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/servo.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
