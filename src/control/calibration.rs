//! Reference search.
//!
//! Level-triggered: the sweep advances one coil forward on every tick the
//! detector reports the reference, and finishes on the first tick it does
//! not. There is no step limit.

use crate::coil::{CoilDriver, CoilSequencer, Direction};
use crate::detector::ReferenceDetector;
use crate::error::HardwareError;
use crate::servo::{ActuatorState, Mode};

/// Result of a single calibration tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationStep {
    /// Reference still present; advanced to `coil`.
    Advanced {
        /// Newly energized coil.
        coil: usize,
    },
    /// Reference cleared; position zero established.
    Complete,
}

/// Run one calibration tick.
///
/// On completion the state is Idle with both positions at zero. On error the
/// state is left untouched.
pub fn tick<C, D>(
    state: &mut ActuatorState,
    coils: &mut CoilSequencer<C>,
    detector: &mut D,
) -> Result<CalibrationStep, HardwareError>
where
    C: CoilDriver,
    D: ReferenceDetector,
{
    debug_assert_eq!(state.mode, Mode::Calibrating);

    if detector.read()? {
        let coil = coils.step(state.active_coil_index, Direction::Forward)?;
        state.active_coil_index = coil;
        return Ok(CalibrationStep::Advanced { coil });
    }

    state.mode = Mode::Idle;
    state.current_position = 0;
    state.target_position = 0;
    state.calibrated = true;
    state.last_fault = None;
    Ok(CalibrationStep::Complete)
}
