//! Simulated pins shared by the integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use coil_servo::{Actuator, CoilBank, Detector, ServoBuilder};
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};

/// Coil pin writing into a shared level table.
#[derive(Clone)]
pub struct CoilPin {
    index: usize,
    levels: Arc<Mutex<Vec<bool>>>,
}

impl ErrorType for CoilPin {
    type Error = ErrorKind;
}

impl OutputPin for CoilPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.lock().unwrap()[self.index] = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.lock().unwrap()[self.index] = true;
        Ok(())
    }
}

/// Detector pin replaying scripted levels, then holding `rest`.
#[derive(Clone)]
pub struct DetectorPin {
    readings: Arc<Mutex<VecDeque<bool>>>,
    rest: bool,
    broken: Arc<Mutex<bool>>,
}

impl DetectorPin {
    pub fn push(&self, levels: &[bool]) {
        self.readings.lock().unwrap().extend(levels.iter().copied());
    }

    pub fn break_pin(&self) {
        *self.broken.lock().unwrap() = true;
    }
}

impl ErrorType for DetectorPin {
    type Error = ErrorKind;
}

impl InputPin for DetectorPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if *self.broken.lock().unwrap() {
            return Err(ErrorKind::Other);
        }
        Ok(self.readings.lock().unwrap().pop_front().unwrap_or(self.rest))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Handles for inspecting a simulated rig after the pins moved into the actuator.
pub struct Rig {
    pub levels: Arc<Mutex<Vec<bool>>>,
    pub detector: DetectorPin,
}

impl Rig {
    /// Indices of all energized coils.
    pub fn energized(&self) -> Vec<usize> {
        self.levels
            .lock()
            .unwrap()
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }
}

pub type SimActuator = Actuator<CoilBank<CoilPin>, Detector<DetectorPin>>;

/// `count` coil pins sharing one level table.
pub fn coil_pins(count: usize) -> (Vec<CoilPin>, Arc<Mutex<Vec<bool>>>) {
    let levels = Arc::new(Mutex::new(vec![false; count]));
    let pins = (0..count)
        .map(|index| CoilPin {
            index,
            levels: Arc::clone(&levels),
        })
        .collect();
    (pins, levels)
}

/// Builder preloaded with `coils` simulated coils and a detector that replays
/// `readings` (the first one is consumed at startup) and then reads low.
pub fn builder(coils: usize, readings: &[bool]) -> (ServoBuilder<CoilPin, DetectorPin>, Rig) {
    let (pins, levels) = coil_pins(coils);
    let detector = DetectorPin {
        readings: Arc::new(Mutex::new(readings.iter().copied().collect())),
        rest: false,
        broken: Arc::new(Mutex::new(false)),
    };

    let builder = ServoBuilder::new().coils(pins).detector(detector.clone());
    (builder, Rig { levels, detector })
}

/// Built actuator with default configuration.
pub fn rig(coils: usize, readings: &[bool]) -> (SimActuator, Rig) {
    let (builder, rig) = builder(coils, readings);
    (builder.build().expect("simulated rig should build"), rig)
}
