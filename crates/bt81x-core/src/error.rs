//! Driver error taxonomy, generic over transport errors.

use core::fmt;

/// Readiness poll that exhausted its attempt budget without observing the
/// expected sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Readiness {
    /// The identification register never reported the running-engine value.
    ChipActive,
    /// The CPU reset register never returned to zero.
    ResetComplete,
}

/// A display-list operand that does not fit its opcode bit field.
///
/// The hardware packs operands without overflow checks, so an oversized
/// value would silently corrupt adjacent fields; the encoder rejects it
/// before any bytes reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncodeError {
    /// Name of the offending operand.
    pub field: &'static str,
    pub value: i32,
    pub min: i32,
    pub max: i32,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} outside [{}, {}]",
            self.field, self.value, self.min, self.max
        )
    }
}

/// Error type for driver operations, generic over transport errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: fmt::Debug> {
    /// The transport could not complete a byte transfer. Never retried;
    /// the in-progress operation is abandoned with protocol state intact.
    Transport(E),
    /// A readiness poll timed out. Recoverable: the caller may re-run
    /// bring-up or power-cycle the chip.
    Timeout(Readiness),
    /// A drawing operand did not fit its opcode bit field.
    Encode(EncodeError),
    /// Appending would run past the end of display-list RAM. The cursor is
    /// left unchanged.
    DisplayListFull {
        /// Cursor position at the time of the rejected append.
        offset: u32,
    },
}

impl<E: fmt::Debug> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Transport(e)
    }
}
