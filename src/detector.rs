//! Reference detector capability.

use embedded_hal::digital::InputPin;

use crate::error::HardwareError;

/// Capability to sample the binary reference signal.
pub trait ReferenceDetector {
    /// Instantaneous, non-blocking read. `true` means the reference is present.
    fn read(&mut self) -> Result<bool, HardwareError>;
}

/// Reference detector on an embedded-hal input pin.
pub struct Detector<P>
where
    P: InputPin,
{
    pin: P,
    active_low: bool,
}

impl<P> Detector<P>
where
    P: InputPin,
{
    /// Detector that reports the reference while the pin is high.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
        }
    }

    /// Detector that reports the reference while the pin is low.
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
        }
    }

    /// Whether pin logic is inverted.
    #[inline]
    pub fn is_active_low(&self) -> bool {
        self.active_low
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> ReferenceDetector for Detector<P>
where
    P: InputPin,
{
    fn read(&mut self) -> Result<bool, HardwareError> {
        let high = self.pin.is_high().map_err(|_| HardwareError::DetectorFault)?;
        Ok(high != self.active_low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_active_high() {
        let pin = PinMock::new(&[
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ]);
        let mut handle = pin.clone();

        let mut detector = Detector::new(pin);
        assert_eq!(detector.read(), Ok(true));
        assert_eq!(detector.read(), Ok(false));

        handle.done();
    }

    #[test]
    fn test_active_low_inverts() {
        let pin = PinMock::new(&[
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ]);
        let mut handle = pin.clone();

        let mut detector = Detector::active_low(pin);
        assert!(detector.is_active_low());
        assert_eq!(detector.read(), Ok(false));
        assert_eq!(detector.read(), Ok(true));

        handle.done();
    }
}
