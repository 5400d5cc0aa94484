//! Builder pattern for Actuator.

use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;

use crate::coil::{CoilBank, MAX_COILS};
use crate::command::BusyPolicy;
use crate::config::{validate_config, PositionLimits, ServoConfig};
use crate::detector::Detector;
use crate::error::{ConfigError, Error, Result};

use super::actuator::Actuator;
use super::machine::{CommandPolicy, ServoCore};

/// Builder for creating Actuator instances from pins.
pub struct ServoBuilder<COIL, DET>
where
    COIL: OutputPin,
    DET: InputPin,
{
    coils: Vec<COIL, MAX_COILS>,
    dropped_coils: usize,
    detector: Option<DET>,
    config: ServoConfig,
}

impl<COIL, DET> Default for ServoBuilder<COIL, DET>
where
    COIL: OutputPin,
    DET: InputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<COIL, DET> ServoBuilder<COIL, DET>
where
    COIL: OutputPin,
    DET: InputPin,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            coils: Vec::new(),
            dropped_coils: 0,
            detector: None,
            config: ServoConfig::default(),
        }
    }

    /// Append one coil pin. Coils are sequenced in the order they are added.
    pub fn coil(mut self, pin: COIL) -> Self {
        if self.coils.push(pin).is_err() {
            self.dropped_coils += 1;
        }
        self
    }

    /// Append several coil pins in order.
    pub fn coils<I>(self, pins: I) -> Self
    where
        I: IntoIterator<Item = COIL>,
    {
        pins.into_iter().fold(self, Self::coil)
    }

    /// Set the detector pin.
    pub fn detector(mut self, pin: DET) -> Self {
        self.detector = Some(pin);
        self
    }

    /// Set the actuator name.
    pub fn name(mut self, name: &str) -> Self {
        if let Ok(name) = heapless::String::try_from(name) {
            self.config.name = name;
        }
        self
    }

    /// Set the busy policy.
    pub fn busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.config.busy_policy = policy;
        self
    }

    /// Set position limits.
    pub fn limits(mut self, limits: PositionLimits) -> Self {
        self.config.limits = limits;
        self
    }

    /// Set the destination payload bound.
    pub fn max_payload_len(mut self, len: usize) -> Self {
        self.config.max_payload_len = len;
        self
    }

    /// Set detector pin inversion.
    pub fn detector_active_low(mut self, active_low: bool) -> Self {
        self.config.detector_active_low = active_low;
        self
    }

    /// Configure from a ServoConfig, replacing earlier settings.
    pub fn from_config(mut self, config: &ServoConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Build the single-context core.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the coil count does
    /// not match the configuration, a pin is missing, or initial hardware
    /// access fails.
    pub fn build_core(self) -> Result<(ServoConfig, ServoCore<CoilBank<COIL>, Detector<DET>>)> {
        validate_config(&self.config)?;

        let found = self.coils.len() + self.dropped_coils;
        if let Some(expected) = self.config.coil_count {
            if expected != found {
                return Err(Error::Config(ConfigError::CoilCountMismatch { expected, found }));
            }
        }
        if found == 0 || found > MAX_COILS {
            return Err(Error::Config(ConfigError::InvalidCoilCount(found)));
        }

        let detector = self
            .detector
            .ok_or(Error::Config(ConfigError::Missing("detector pin")))?;
        let detector = if self.config.detector_active_low {
            Detector::active_low(detector)
        } else {
            Detector::new(detector)
        };

        let bank = CoilBank::new(self.coils)?;
        let core = ServoCore::new(bank, detector, CommandPolicy::from_config(&self.config))?;
        Ok((self.config, core))
    }

    /// Build the actuator, guarded by a critical-section mutex.
    ///
    /// To pick another raw mutex, use [`ServoBuilder::build_core`] with
    /// [`Actuator::new`].
    ///
    /// # Errors
    ///
    /// See [`ServoBuilder::build_core`].
    pub fn build(self) -> Result<Actuator<CoilBank<COIL>, Detector<DET>>> {
        let (config, core) = self.build_core()?;
        Ok(Actuator::new(config, core))
    }
}
