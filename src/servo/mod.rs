//! Servo module for coil-servo.
//!
//! Provides the actuator state machine, its lock-protected command interface,
//! and a periodic tick loop.

mod actuator;
mod builder;
mod machine;
mod state;
mod ticker;

pub use self::actuator::Actuator;
pub use self::builder::ServoBuilder;
pub use self::machine::{CommandPolicy, ServoCore, TickEvent};
pub use self::state::{ActuatorState, Mode};
pub use self::ticker::TickLoop;
