//! Coil module for coil-servo.
//!
//! Provides the coil driver capability and the cyclic coil sequencer.

mod driver;
mod sequencer;

pub use driver::{CoilBank, CoilDriver};
pub use sequencer::{next_index, CoilSequencer, Direction};

/// Maximum number of coils a single actuator can drive.
pub const MAX_COILS: usize = 16;
