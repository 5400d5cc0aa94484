//! Command payload handling.
//!
//! Parsing of destination writes, formatting of position reads, and the
//! single policy that decides what happens to commands issued while the
//! actuator is busy.

use core::fmt::Write;

use serde::Deserialize;

use crate::error::CommandError;
use crate::servo::Mode;

/// Default destination buffer size in bytes.
pub const DEFAULT_PAYLOAD_LEN: usize = 10;

/// Largest destination buffer a configuration may ask for.
///
/// Any payload of this size still fits an `i64` without overflow.
pub const MAX_PAYLOAD_LEN: usize = 18;

/// Decimal position plus trailing newline (`u32::MAX` is 10 digits).
pub type PositionText = heapless::String<11>;

/// Parse a destination payload.
///
/// Accepts an optional leading `+` or `-`, one or more ASCII digits and at
/// most one trailing newline. Anything else, including surrounding spaces, is
/// [`CommandError::InvalidFormat`].
///
/// # Errors
///
/// - [`CommandError::PayloadTooLarge`] if `payload.len() > max_len`
/// - [`CommandError::InvalidFormat`] if the text is not a base-10 integer
pub fn parse_destination(payload: &[u8], max_len: usize) -> Result<i64, CommandError> {
    if payload.len() > max_len {
        return Err(CommandError::PayloadTooLarge {
            len: payload.len(),
            max: max_len,
        });
    }

    let text = core::str::from_utf8(payload).map_err(|_| CommandError::InvalidFormat)?;
    let text = text.strip_suffix('\n').unwrap_or(text);

    text.parse::<i64>().map_err(|_| CommandError::InvalidFormat)
}

/// Format a position for the read side of the command interface.
pub fn format_position(position: u32) -> PositionText {
    let mut text = PositionText::new();
    // Capacity covers every u32 plus the newline
    let _ = writeln!(text, "{}", position);
    text
}

/// What happens to a command that arrives while the actuator is not idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Accept the command and drop it silently.
    #[default]
    Ignore,
    /// Fail the command with [`CommandError::Busy`].
    Reject,
}

/// Decision taken by [`BusyPolicy::admit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Apply the command.
    Accepted,
    /// Report success but do nothing.
    Ignored,
}

impl BusyPolicy {
    /// Decide whether a command issued in `mode` is applied.
    ///
    /// Commands are only ever applied in [`Mode::Idle`].
    pub fn admit(self, mode: Mode) -> Result<Admission, CommandError> {
        match (mode, self) {
            (Mode::Idle, _) => Ok(Admission::Accepted),
            (Mode::Calibrating | Mode::Seeking, BusyPolicy::Ignore) => Ok(Admission::Ignored),
            (Mode::Calibrating | Mode::Seeking, BusyPolicy::Reject) => {
                Err(CommandError::Busy { mode })
            }
        }
    }
}
