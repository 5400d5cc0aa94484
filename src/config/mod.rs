//! Configuration module for coil-servo.
//!
//! Provides types for loading and validating actuator configuration from TOML
//! files (with `std` feature) or pre-parsed data.

mod limits;
#[cfg(feature = "std")]
mod loader;
mod servo;
mod validation;

pub use limits::{LimitPolicy, PositionLimits};
pub use servo::ServoConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

pub use crate::command::BusyPolicy;
