//! # coil-servo
//!
//! Self-calibrating multi-coil servo control with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Coil sequencing**: One coil energized at a time, stepped around a ring
//! - **Self-calibration**: Sweeps forward until the reference detector clears
//! - **Tick-driven**: One step per control-loop tick, never overshooting
//! - **Shared safely**: Commands and ticks serialized through one mutex
//! - **no_std compatible**: Core library works without standard library
//! - **Configuration-driven**: Optional TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coil_servo::{ServoBuilder, TickLoop};
//!
//! let actuator = ServoBuilder::new()
//!     .coils([coil_a, coil_b, coil_c, coil_d])
//!     .detector(detector_pin)
//!     .build()?;
//!
//! // Tick source, usually its own task or timer interrupt
//! TickLoop::new(&actuator, delay).run_while(|_| true);
//!
//! // Command side, from any context
//! actuator.write_destination(b"5\n")?;
//! let text = actuator.read_position();
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and the std critical-section
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to later modules
mod fmt;

// Core modules
pub mod coil;
pub mod command;
pub mod config;
pub mod control;
pub mod detector;
pub mod error;
pub mod servo;

// Re-exports for ergonomic API
pub use coil::{CoilBank, CoilDriver, CoilSequencer, Direction, MAX_COILS};
pub use command::{BusyPolicy, PositionText};
pub use config::{validate_config, LimitPolicy, PositionLimits, ServoConfig};
pub use detector::{Detector, ReferenceDetector};
pub use error::{Error, Result};
pub use servo::{Actuator, ActuatorState, Mode, ServoBuilder, ServoCore, TickEvent, TickLoop};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
