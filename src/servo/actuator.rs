//! Lock-protected actuator shared by the tick source and command callers.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::blocking_mutex::Mutex;

use crate::coil::CoilDriver;
use crate::command::PositionText;
use crate::config::ServoConfig;
use crate::detector::ReferenceDetector;
use crate::error::Result;

use super::machine::{ServoCore, TickEvent};
use super::state::ActuatorState;

/// Servo actuator with a command interface.
///
/// Every operation runs inside one critical section on the same
/// [`ServoCore`], so a destination write never interleaves with a tick and the
/// Idle check is applied atomically with the transition it guards.
///
/// Generic over:
/// - `C`: coil driver
/// - `D`: reference detector
/// - `M`: raw mutex guarding the state (defaults to `CriticalSectionRawMutex`)
pub struct Actuator<C, D, M = CriticalSectionRawMutex>
where
    C: CoilDriver,
    D: ReferenceDetector,
    M: RawMutex,
{
    config: ServoConfig,
    core: Mutex<M, RefCell<ServoCore<C, D>>>,
}

impl<C, D, M> Actuator<C, D, M>
where
    C: CoilDriver,
    D: ReferenceDetector,
    M: RawMutex,
{
    /// Wrap an initialized core.
    pub fn new(config: ServoConfig, core: ServoCore<C, D>) -> Self {
        Self {
            config,
            core: Mutex::new(RefCell::new(core)),
        }
    }

    fn with_core<R>(&self, f: impl FnOnce(&mut ServoCore<C, D>) -> R) -> R {
        self.core.lock(|core| f(&mut core.borrow_mut()))
    }

    /// Get the configuration the actuator was built from.
    #[inline]
    pub fn config(&self) -> &ServoConfig {
        &self.config
    }

    /// Get the actuator name.
    #[inline]
    pub fn name(&self) -> &str {
        self.config.name.as_str()
    }

    /// Run one control-loop step. Call this from the periodic tick source.
    pub fn tick(&self) -> TickEvent {
        self.with_core(|core| core.tick())
    }

    /// Accept a desired-position write.
    ///
    /// See [`ServoCore::write_destination`].
    pub fn write_destination(&self, payload: &[u8]) -> Result<usize> {
        self.with_core(|core| core.write_destination(payload))
    }

    /// Restart calibration if idle.
    ///
    /// See [`ServoCore::request_calibration`].
    pub fn request_calibration(&self) -> Result<()> {
        self.with_core(|core| core.request_calibration())
    }

    /// Current position as decimal text with trailing newline.
    pub fn read_position(&self) -> PositionText {
        self.with_core(|core| core.read_position())
    }

    /// Current position in steps.
    pub fn position(&self) -> u32 {
        self.with_core(|core| core.position())
    }

    /// Consistent copy of the whole state.
    pub fn snapshot(&self) -> ActuatorState {
        self.with_core(|core| *core.state())
    }

    /// Decommission the actuator and give the hardware back.
    pub fn release(self) -> (C, D) {
        self.core.into_inner().into_inner().release()
    }
}
