//! Unit test harness for coil-servo.
//!
//! This module organizes unit tests for each component of the library.

#[path = "../common/mod.rs"]
mod common;

mod builder_config;
mod busy_policy;
