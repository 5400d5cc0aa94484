//! Closed-loop seeking towards the target position.

use core::cmp::Ordering;

use crate::coil::{CoilDriver, CoilSequencer, Direction};
use crate::error::HardwareError;
use crate::servo::{ActuatorState, Mode};

/// Result of a single seeking tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekStep {
    /// Moved one step.
    Moved {
        /// Direction of the step.
        direction: Direction,
        /// Position after the step.
        position: u32,
    },
    /// Already at target; now Idle. No coil was touched.
    Arrived,
}

/// Run one seeking tick.
///
/// Equality is checked before any motion, so the tick that finds the target
/// reached does not step. Position only changes after the coil write
/// succeeded.
pub fn tick<C>(
    state: &mut ActuatorState,
    coils: &mut CoilSequencer<C>,
) -> Result<SeekStep, HardwareError>
where
    C: CoilDriver,
{
    debug_assert_eq!(state.mode, Mode::Seeking);

    let direction = match state.current_position.cmp(&state.target_position) {
        Ordering::Greater => Direction::Backward,
        Ordering::Less => Direction::Forward,
        Ordering::Equal => {
            state.mode = Mode::Idle;
            return Ok(SeekStep::Arrived);
        }
    };

    state.active_coil_index = coils.step(state.active_coil_index, direction)?;
    state.current_position = match direction {
        Direction::Forward => state.current_position + 1,
        Direction::Backward => state.current_position - 1,
    };

    Ok(SeekStep::Moved {
        direction,
        position: state.current_position,
    })
}
