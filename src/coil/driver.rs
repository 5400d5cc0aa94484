//! Coil driver capability and its GPIO implementation.

use embedded_hal::digital::OutputPin;
use heapless::Vec;

use crate::error::{ConfigError, Error, HardwareError, Result};

use super::MAX_COILS;

/// Capability to energize exactly one coil of a fixed bank.
pub trait CoilDriver {
    /// Number of coils in the bank.
    fn coil_count(&self) -> usize;

    /// Energize coil `index` and de-energize all others.
    ///
    /// Must be idempotent. Fails with [`HardwareError::InvalidCoilIndex`]
    /// without touching any coil when `index` is out of range.
    fn set_exclusive(&mut self, index: usize) -> core::result::Result<(), HardwareError>;
}

/// A bank of coils driven by embedded-hal output pins.
///
/// Pins are ordered: coil `i` is the `i`-th pin supplied to [`CoilBank::new`].
pub struct CoilBank<P>
where
    P: OutputPin,
{
    coils: Vec<P, MAX_COILS>,
}

impl<P> CoilBank<P>
where
    P: OutputPin,
{
    /// Create a bank from an ordered set of pins.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCoilCount`] if no pins are given or more
    /// than [`MAX_COILS`].
    pub fn new<I>(pins: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
    {
        let mut coils = Vec::new();
        let mut count = 0;
        for pin in pins {
            count += 1;
            // Keep counting past capacity so the error reports the real number
            let _ = coils.push(pin);
        }

        if count == 0 || count > MAX_COILS {
            return Err(Error::Config(ConfigError::InvalidCoilCount(count)));
        }

        Ok(Self { coils })
    }

    /// Number of coils in the bank.
    #[inline]
    pub fn len(&self) -> usize {
        self.coils.len()
    }

    /// Always false; a bank holds at least one coil.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coils.is_empty()
    }

    /// Give the pins back.
    pub fn release(self) -> Vec<P, MAX_COILS> {
        self.coils
    }
}

impl<P> CoilDriver for CoilBank<P>
where
    P: OutputPin,
{
    fn coil_count(&self) -> usize {
        self.coils.len()
    }

    fn set_exclusive(&mut self, index: usize) -> core::result::Result<(), HardwareError> {
        let count = self.coils.len();
        if index >= count {
            return Err(HardwareError::InvalidCoilIndex { index, count });
        }

        // Break before make: everything else goes low before the target goes high
        for (i, coil) in self.coils.iter_mut().enumerate() {
            if i != index {
                coil.set_low().map_err(|_| HardwareError::CoilFault { index: i })?;
            }
        }

        self.coils[index]
            .set_high()
            .map_err(|_| HardwareError::CoilFault { index })
    }
}
