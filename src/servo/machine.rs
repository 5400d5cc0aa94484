//! Actuator state machine.
//!
//! [`ServoCore`] owns the state, the coil sequencer and the detector. It is
//! single-context: every method takes `&mut self`. Share it between a tick
//! context and command callers through [`crate::servo::Actuator`].

use crate::coil::{CoilDriver, CoilSequencer};
use crate::command::{format_position, parse_destination, Admission, BusyPolicy, PositionText};
use crate::config::{PositionLimits, ServoConfig};
use crate::control::{calibration, position, CalibrationStep, SeekStep};
use crate::detector::ReferenceDetector;
use crate::error::{HardwareError, Result};

use super::state::{ActuatorState, Mode};

/// How commands are screened before they touch the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPolicy {
    /// Largest accepted destination payload in bytes.
    pub max_payload_len: usize,
    /// Accepted destination range.
    pub limits: PositionLimits,
    /// Handling of commands issued while not idle.
    pub busy: BusyPolicy,
}

impl CommandPolicy {
    /// Extract the command policy from a configuration.
    pub fn from_config(config: &ServoConfig) -> Self {
        Self {
            max_payload_len: config.max_payload_len,
            limits: config.limits,
            busy: config.busy_policy,
        }
    }
}

impl Default for CommandPolicy {
    fn default() -> Self {
        Self::from_config(&ServoConfig::default())
    }
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing to do.
    Idle,
    /// Calibration controller ran.
    Calibration(CalibrationStep),
    /// Position controller ran.
    Seek(SeekStep),
    /// Hardware failed; the actuator is now Idle.
    Fault(HardwareError),
}

/// Single-context actuator state machine.
pub struct ServoCore<C, D>
where
    C: CoilDriver,
    D: ReferenceDetector,
{
    state: ActuatorState,
    coils: CoilSequencer<C>,
    detector: D,
    policy: CommandPolicy,
}

impl<C, D> ServoCore<C, D>
where
    C: CoilDriver,
    D: ReferenceDetector,
{
    /// Bring up the actuator.
    ///
    /// Energizes coil 0, samples the detector once for the log, and starts in
    /// [`Mode::Calibrating`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Hardware`] if the coil write or the detector
    /// read fails.
    pub fn new(coils: C, mut detector: D, policy: CommandPolicy) -> Result<Self> {
        let mut coils = CoilSequencer::new(coils);
        let mut state = ActuatorState::startup();
        state.active_coil_index = coils.energize(0)?;

        let reference = detector.read()?;
        info!(
            "servo up: {} coils, reference {}",
            coils.coil_count(),
            reference
        );

        Ok(Self {
            state,
            coils,
            detector,
            policy,
        })
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &ActuatorState {
        &self.state
    }

    /// Active command policy.
    #[inline]
    pub fn policy(&self) -> &CommandPolicy {
        &self.policy
    }

    /// Number of coils in the ring.
    #[inline]
    pub fn coil_count(&self) -> usize {
        self.coils.coil_count()
    }

    /// Run one control-loop step.
    ///
    /// Dispatches to the controller for the current mode. A hardware fault
    /// forces [`Mode::Idle`] and is recorded in
    /// [`ActuatorState::last_fault`].
    pub fn tick(&mut self) -> TickEvent {
        let result = match self.state.mode {
            Mode::Idle => return TickEvent::Idle,
            Mode::Calibrating => {
                calibration::tick(&mut self.state, &mut self.coils, &mut self.detector)
                    .map(TickEvent::Calibration)
            }
            Mode::Seeking => position::tick(&mut self.state, &mut self.coils).map(TickEvent::Seek),
        };

        let event = match result {
            Ok(event) => event,
            Err(fault) => return self.fault(fault),
        };

        match event {
            TickEvent::Calibration(CalibrationStep::Complete) => {
                info!("calibration complete at coil {}", self.state.active_coil_index);
            }
            TickEvent::Seek(SeekStep::Arrived) => {
                info!("reached position {}", self.state.current_position);
            }
            _ => {}
        }

        event
    }

    /// Handle a destination write.
    ///
    /// Returns the number of bytes consumed, which is the whole payload. A
    /// write that the busy policy ignores reports the same count as one that
    /// was applied.
    ///
    /// # Errors
    ///
    /// - [`crate::error::CommandError::PayloadTooLarge`]
    /// - [`crate::error::CommandError::InvalidFormat`]
    /// - [`crate::error::CommandError::OutOfRange`] under [`crate::config::LimitPolicy::Reject`]
    /// - [`crate::error::CommandError::Busy`] under [`BusyPolicy::Reject`]
    pub fn write_destination(&mut self, payload: &[u8]) -> Result<usize> {
        let value = parse_destination(payload, self.policy.max_payload_len)?;
        let target = self.policy.limits.apply(value)?;

        match self.policy.busy.admit(self.state.mode)? {
            Admission::Accepted => {
                self.state.target_position = target;
                self.state.mode = Mode::Seeking;
                debug!(
                    "seeking {} -> {}",
                    self.state.current_position,
                    target
                );
            }
            Admission::Ignored => {
                debug!("destination {} ignored while {}", target, self.state.mode);
            }
        }

        Ok(payload.len())
    }

    /// Restart calibration.
    ///
    /// # Errors
    ///
    /// [`crate::error::CommandError::Busy`] under [`BusyPolicy::Reject`] when
    /// not idle. Under the default policy this never fails.
    pub fn request_calibration(&mut self) -> Result<()> {
        match self.policy.busy.admit(self.state.mode)? {
            Admission::Accepted => {
                self.state.mode = Mode::Calibrating;
                info!("calibration requested");
            }
            Admission::Ignored => {
                debug!("calibration request ignored while {}", self.state.mode);
            }
        }
        Ok(())
    }

    /// Current position in steps.
    #[inline]
    pub fn position(&self) -> u32 {
        self.state.current_position
    }

    /// Current position as text with trailing newline.
    pub fn read_position(&self) -> PositionText {
        format_position(self.state.current_position)
    }

    /// Tear down and give the hardware back.
    pub fn release(self) -> (C, D) {
        (self.coils.release(), self.detector)
    }

    fn fault(&mut self, fault: HardwareError) -> TickEvent {
        error!("{} while {}, forcing idle", fault, self.state.mode);

        if self.state.mode == Mode::Calibrating {
            self.state.calibrated = false;
        }
        self.state.mode = Mode::Idle;
        self.state.last_fault = Some(fault);
        TickEvent::Fault(fault)
    }
}
