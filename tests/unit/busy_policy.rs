//! Unit tests for command handling while the actuator is busy.

use coil_servo::error::{CommandError, Error};
use coil_servo::{BusyPolicy, Mode};

use crate::common::builder;

/// Default policy: busy commands succeed and change nothing.
#[test]
fn test_ignore_policy_is_silent() {
    let (builder, _rig) = builder(4, &[false, true, true]);
    let actuator = builder.build().unwrap();

    assert_eq!(actuator.write_destination(b"8"), Ok(1));
    assert_eq!(actuator.request_calibration(), Ok(()));

    let state = actuator.snapshot();
    assert_eq!(state.mode(), Mode::Calibrating);
    assert_eq!(state.target_position(), 0);
}

/// Reject policy: busy commands fail with the mode they ran into.
#[test]
fn test_reject_policy_reports_mode() {
    let (builder, _rig) = builder(4, &[]);
    let actuator = builder.busy_policy(BusyPolicy::Reject).build().unwrap();

    assert_eq!(
        actuator.write_destination(b"8"),
        Err(Error::Command(CommandError::Busy {
            mode: Mode::Calibrating
        }))
    );

    actuator.tick();
    assert_eq!(actuator.write_destination(b"8"), Ok(1));
    assert_eq!(
        actuator.write_destination(b"2"),
        Err(Error::Command(CommandError::Busy { mode: Mode::Seeking }))
    );
    assert_eq!(
        actuator.request_calibration(),
        Err(Error::Command(CommandError::Busy { mode: Mode::Seeking }))
    );
    assert_eq!(actuator.snapshot().target_position(), 8);
}

/// Format errors win over the busy check.
#[test]
fn test_malformed_payload_reported_even_when_busy() {
    let (builder, _rig) = builder(4, &[]);
    let actuator = builder.build().unwrap();

    assert_eq!(
        actuator.write_destination(b"five"),
        Err(Error::Command(CommandError::InvalidFormat))
    );
}
