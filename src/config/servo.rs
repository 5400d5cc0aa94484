//! Servo configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::command::{BusyPolicy, DEFAULT_PAYLOAD_LEN};

use super::limits::PositionLimits;

/// Complete actuator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServoConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Expected number of coils. When set, the builder checks it against the
    /// pins it is given.
    #[serde(default)]
    pub coil_count: Option<usize>,

    /// Control loop period in milliseconds.
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u32,

    /// Delay before the first tick in milliseconds.
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u32,

    /// Largest accepted destination payload in bytes.
    #[serde(default = "default_max_payload_len")]
    pub max_payload_len: usize,

    /// Detector reports the reference while its pin is low.
    #[serde(default)]
    pub detector_active_low: bool,

    /// Handling of commands issued while not idle.
    #[serde(default)]
    pub busy_policy: BusyPolicy,

    /// Accepted destination range.
    #[serde(default)]
    pub limits: PositionLimits,
}

fn default_name() -> String<32> {
    String::try_from("servo").unwrap_or_default()
}

fn default_tick_period_ms() -> u32 {
    100
}

fn default_startup_delay_ms() -> u32 {
    200
}

fn default_max_payload_len() -> usize {
    DEFAULT_PAYLOAD_LEN
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            coil_count: None,
            tick_period_ms: default_tick_period_ms(),
            startup_delay_ms: default_startup_delay_ms(),
            max_payload_len: default_max_payload_len(),
            detector_active_low: false,
            busy_policy: BusyPolicy::default(),
            limits: PositionLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServoConfig::default();

        assert_eq!(config.name.as_str(), "servo");
        assert_eq!(config.tick_period_ms, 100);
        assert_eq!(config.startup_delay_ms, 200);
        assert_eq!(config.max_payload_len, 10);
        assert_eq!(config.busy_policy, BusyPolicy::Ignore);
        assert!(!config.detector_active_low);
    }
}
