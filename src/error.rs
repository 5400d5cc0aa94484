//! Error types for coil-servo library.
//!
//! Provides unified error handling across configuration, commands, and hardware access.

use core::fmt;

use crate::servo::Mode;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all coil-servo operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Rejected command from the command interface
    Command(CommandError),
    /// Coil or detector failure
    Hardware(HardwareError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Coil count outside `1..=MAX_COILS`
    InvalidCoilCount(usize),
    /// Coil count in configuration does not match the pins supplied
    CoilCountMismatch {
        /// Count declared in configuration
        expected: usize,
        /// Count of pins supplied to the builder
        found: usize,
    },
    /// Tick period must be > 0
    InvalidTickPeriod(u32),
    /// Payload bound outside `1..=MAX_PAYLOAD_LEN`
    InvalidPayloadLimit(usize),
    /// Position limit must be > 0
    InvalidPositionLimit(u32),
    /// A required builder field was not provided
    Missing(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors surfaced synchronously by the command interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Payload exceeds the destination buffer
    PayloadTooLarge {
        /// Length of the rejected payload
        len: usize,
        /// Largest accepted payload
        max: usize,
    },
    /// Payload is not a base-10 signed integer
    InvalidFormat,
    /// Parsed value falls outside the accepted position range
    OutOfRange {
        /// Parsed value
        value: i64,
        /// Largest accepted position
        max: u32,
    },
    /// Actuator is not idle and the busy policy rejects the command
    Busy {
        /// Mode at the time of the command
        mode: Mode,
    },
}

/// Hardware and internal invariant failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// Coil index outside the bank
    InvalidCoilIndex {
        /// Requested index
        index: usize,
        /// Number of coils in the bank
        count: usize,
    },
    /// Writing a coil pin failed
    CoilFault {
        /// Coil being written when the failure occurred
        index: usize,
    },
    /// Reading the detector pin failed
    DetectorFault,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidCoilCount(n) => {
                write!(f, "Invalid coil count: {}. Must be 1-{}", n, crate::coil::MAX_COILS)
            }
            ConfigError::CoilCountMismatch { expected, found } => {
                write!(f, "Configured for {} coils but {} pins were supplied", expected, found)
            }
            ConfigError::InvalidTickPeriod(ms) => write!(f, "Invalid tick period: {} ms. Must be > 0", ms),
            ConfigError::InvalidPayloadLimit(n) => write!(
                f,
                "Invalid payload limit: {}. Must be 1-{}",
                n,
                crate::command::MAX_PAYLOAD_LEN
            ),
            ConfigError::InvalidPositionLimit(n) => write!(f, "Invalid position limit: {}. Must be > 0", n),
            ConfigError::Missing(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::PayloadTooLarge { len, max } => {
                write!(f, "Payload of {} bytes exceeds {} byte limit", len, max)
            }
            CommandError::InvalidFormat => write!(f, "Payload is not a base-10 integer"),
            CommandError::OutOfRange { value, max } => {
                write!(f, "Position {} outside 0..={}", value, max)
            }
            CommandError::Busy { mode } => write!(f, "Actuator busy ({})", mode),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::InvalidCoilIndex { index, count } => {
                write!(f, "Coil index {} out of range for {} coils", index, count)
            }
            HardwareError::CoilFault { index } => write!(f, "GPIO write failed on coil {}", index),
            HardwareError::DetectorFault => write!(f, "GPIO read failed on detector"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}
