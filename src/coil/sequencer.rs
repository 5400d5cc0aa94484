//! Cyclic coil sequencing.
//!
//! Coils are arranged in a ring; one step moves the energized coil to a
//! neighbour and never leaves more than one coil on.

use crate::error::HardwareError;

use super::driver::CoilDriver;

/// Direction of a single coil step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards higher coil indices (position increases).
    Forward,
    /// Towards lower coil indices (position decreases).
    Backward,
}

impl Direction {
    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Index of the coil one step away from `from` in `direction`.
///
/// Wraps with Euclidean modulo so stepping backward from coil 0 lands on the
/// last coil.
///
/// # Errors
///
/// Returns [`HardwareError::InvalidCoilIndex`] if `from` is not a valid index
/// for `count` coils (which includes `count == 0`).
pub fn next_index(
    from: usize,
    direction: Direction,
    count: usize,
) -> core::result::Result<usize, HardwareError> {
    if from >= count {
        return Err(HardwareError::InvalidCoilIndex { index: from, count });
    }

    let next = (from as i64 + direction.sign()).rem_euclid(count as i64);
    Ok(next as usize)
}

/// Drives a [`CoilDriver`] one step at a time.
///
/// The sequencer does not remember the active coil; callers pass the current
/// index in and commit the returned index themselves.
pub struct CoilSequencer<C>
where
    C: CoilDriver,
{
    driver: C,
}

impl<C> CoilSequencer<C>
where
    C: CoilDriver,
{
    /// Wrap a coil driver.
    pub fn new(driver: C) -> Self {
        Self { driver }
    }

    /// Number of coils in the ring.
    #[inline]
    pub fn coil_count(&self) -> usize {
        self.driver.coil_count()
    }

    /// Force `index` on and every other coil off.
    ///
    /// Only used to establish the initial coil; afterwards the index moves
    /// exclusively through [`CoilSequencer::step`].
    pub fn energize(&mut self, index: usize) -> core::result::Result<usize, HardwareError> {
        let count = self.coil_count();
        if index >= count {
            return Err(HardwareError::InvalidCoilIndex { index, count });
        }
        self.driver.set_exclusive(index)?;
        Ok(index)
    }

    /// Step once from `from` and energize the resulting coil.
    ///
    /// Returns the new active index. Nothing is written when `from` is out of
    /// range.
    pub fn step(
        &mut self,
        from: usize,
        direction: Direction,
    ) -> core::result::Result<usize, HardwareError> {
        let next = next_index(from, direction, self.coil_count())?;
        self.driver.set_exclusive(next)?;
        Ok(next)
    }

    /// Get a reference to the coil driver.
    #[inline]
    pub fn driver(&self) -> &C {
        &self.driver
    }

    /// Get a mutable reference to the coil driver.
    #[inline]
    pub fn driver_mut(&mut self) -> &mut C {
        &mut self.driver
    }

    /// Give the coil driver back.
    pub fn release(self) -> C {
        self.driver
    }
}
