//! Per-tick controllers.
//!
//! Each controller performs at most one coil step per call and reports what it
//! did. Mode dispatch lives in [`crate::servo::ServoCore`].

pub mod calibration;
pub mod position;

pub use calibration::CalibrationStep;
pub use position::SeekStep;
