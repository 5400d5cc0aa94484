//! Blocking periodic tick source.
//!
//! Waits the configured startup delay, then ticks the actuator once per period
//! until the caller says stop. The loop never stops on its own: an idle
//! actuator keeps being ticked.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;

use crate::coil::CoilDriver;
use crate::detector::ReferenceDetector;

use super::actuator::Actuator;
use super::machine::TickEvent;
use super::state::Mode;

/// Periodic tick driver for an [`Actuator`].
pub struct TickLoop<'a, C, D, M, DELAY>
where
    C: CoilDriver,
    D: ReferenceDetector,
    M: RawMutex,
    DELAY: DelayNs,
{
    actuator: &'a Actuator<C, D, M>,
    delay: DELAY,
    period_ms: u32,
    startup_delay_ms: u32,
    started: bool,
}

impl<'a, C, D, M, DELAY> TickLoop<'a, C, D, M, DELAY>
where
    C: CoilDriver,
    D: ReferenceDetector,
    M: RawMutex,
    DELAY: DelayNs,
{
    /// Create a tick loop using the actuator's configured timing.
    pub fn new(actuator: &'a Actuator<C, D, M>, delay: DELAY) -> Self {
        let config = actuator.config();
        Self {
            actuator,
            delay,
            period_ms: config.tick_period_ms,
            startup_delay_ms: config.startup_delay_ms,
            started: false,
        }
    }

    /// Tick period in milliseconds.
    #[inline]
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Tick until `keep_running` returns false for a tick's event.
    ///
    /// The startup delay is only applied on the first call. Returns the
    /// number of ticks run by this call.
    pub fn run_while<F>(&mut self, mut keep_running: F) -> u32
    where
        F: FnMut(&TickEvent) -> bool,
    {
        if !self.started {
            self.delay.delay_ms(self.startup_delay_ms);
            self.started = true;
        }

        let mut ticks = 0;
        loop {
            let event = self.actuator.tick();
            ticks += 1;
            if !keep_running(&event) {
                return ticks;
            }
            self.delay.delay_ms(self.period_ms);
        }
    }

    /// Tick until the actuator is idle.
    ///
    /// Does not return while calibration sees the reference.
    pub fn run_until_idle(&mut self) -> u32 {
        let actuator = self.actuator;
        self.run_while(|_| actuator.snapshot().mode() != Mode::Idle)
    }

    /// Give the delay provider back.
    pub fn release(self) -> DELAY {
        self.delay
    }
}
