//! Unit tests for building actuators from configuration.

use coil_servo::config::{load_config, parse_config, ServoConfig};
use coil_servo::error::{ConfigError, Error};
use coil_servo::{LimitPolicy, Mode, ServoBuilder, MAX_COILS};

use crate::common::{builder, coil_pins, CoilPin, DetectorPin};

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("coil-servo-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
name = "valve"
coil_count = 4

[limits]
max_position = 20
policy = "clamp"
"#,
    )
    .expect("Failed to write config");

    let config = load_config(&path).expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.name.as_str(), "valve");
    assert_eq!(config.coil_count, Some(4));
    assert_eq!(config.limits.policy, LimitPolicy::Clamp);
}

/// Test that a configured actuator applies its limits.
#[test]
fn test_builder_applies_config() {
    let config = parse_config(
        r#"
coil_count = 4
max_payload_len = 4

[limits]
max_position = 20
policy = "clamp"
"#,
    )
    .unwrap();

    let (builder, _rig) = builder(4, &[]);
    let actuator = builder.from_config(&config).build().unwrap();
    actuator.tick();

    actuator.write_destination(b"300").unwrap();
    assert_eq!(actuator.snapshot().target_position(), 20);

    assert!(matches!(
        actuator.write_destination(b"12345"),
        Err(Error::Command(_))
    ));
}

/// Test that declared coil count must match the pins.
#[test]
fn test_coil_count_mismatch() {
    let config = ServoConfig {
        coil_count: Some(6),
        ..ServoConfig::default()
    };

    let (builder, _rig) = builder(4, &[]);
    let result = builder.from_config(&config).build();
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::CoilCountMismatch { expected: 6, found: 4 }))
    ));
}

/// Test that too many pins are reported with the real count.
#[test]
fn test_too_many_coils() {
    let (builder, _rig) = builder(MAX_COILS + 2, &[]);
    let result = builder.build();
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidCoilCount(n))) if n == MAX_COILS + 2
    ));
}

/// Test that coils and a detector pin are required.
#[test]
fn test_missing_pins() {
    let result = ServoBuilder::<CoilPin, DetectorPin>::new().build();
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidCoilCount(0)))
    ));

    let (pins, _levels) = coil_pins(2);
    let result = ServoBuilder::<CoilPin, DetectorPin>::new().coils(pins).build();
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::Missing("detector pin")))
    ));
}

/// Test an active-low detector: a low pin means the reference is present.
#[test]
fn test_active_low_detector() {
    // Startup sample, then two low readings, then high
    let (builder, rig) = builder(4, &[true, false, false, true]);
    let actuator = builder.detector_active_low(true).build().unwrap();

    actuator.tick();
    actuator.tick();
    assert_eq!(actuator.snapshot().mode(), Mode::Calibrating);
    actuator.tick();
    assert_eq!(actuator.snapshot().mode(), Mode::Idle);
    assert_eq!(rig.energized(), vec![2]);
}
