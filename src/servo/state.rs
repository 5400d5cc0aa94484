//! Actuator mode and state.

use core::fmt;

use crate::error::HardwareError;

/// Operating mode of the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// At rest and accepting commands.
    Idle,
    /// Sweeping forward until the detector clears.
    #[default]
    Calibrating,
    /// Stepping towards the target position.
    Seeking,
}

impl Mode {
    /// Get the mode name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Calibrating => "Calibrating",
            Mode::Seeking => "Seeking",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the control loop knows about the actuator.
///
/// Fields are only writable inside the crate; the controllers and the state
/// machine are the sole writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuatorState {
    pub(crate) mode: Mode,
    pub(crate) current_position: u32,
    pub(crate) target_position: u32,
    pub(crate) active_coil_index: usize,
    pub(crate) calibrated: bool,
    pub(crate) last_fault: Option<HardwareError>,
}

impl ActuatorState {
    /// Power-on state: calibrating from coil 0 at position 0.
    pub const fn startup() -> Self {
        Self {
            mode: Mode::Calibrating,
            current_position: 0,
            target_position: 0,
            active_coil_index: 0,
            calibrated: false,
            last_fault: None,
        }
    }

    /// Current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Logical position in steps from the calibrated zero.
    #[inline]
    pub fn current_position(&self) -> u32 {
        self.current_position
    }

    /// Last accepted destination.
    #[inline]
    pub fn target_position(&self) -> u32 {
        self.target_position
    }

    /// Index of the energized coil.
    #[inline]
    pub fn active_coil_index(&self) -> usize {
        self.active_coil_index
    }

    /// Whether a calibration sweep has completed since power-on or the last
    /// fault during calibration.
    #[inline]
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Fault that last forced the actuator to Idle.
    #[inline]
    pub fn last_fault(&self) -> Option<HardwareError> {
        self.last_fault
    }
}
