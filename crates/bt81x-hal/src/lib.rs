#![no_std]

//! Transport abstraction for the BT81x serial protocol.
//!
//! The driver core never touches chip select, clock polarity, or baud rate
//! directly; implementations of these traits own all of that. A transport
//! hands out a [`Bus`] guard per transaction, and the guard's `Drop` impl
//! must deassert chip select so the bus is released on every exit path,
//! including early returns on transfer errors.

/// Scoped access to one bus transaction.
///
/// A value implementing this trait represents an in-progress transaction:
/// chip select is asserted for as long as the value lives. Dropping it ends
/// the transaction.
pub trait Bus {
    type Error: core::fmt::Debug;

    /// Shift out all of `bytes`, blocking until the transfer completes.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Shift in exactly `buf.len()` bytes, blocking until done.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Shift out a single byte.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.write_bytes(&[byte])
    }

    /// Shift in a single byte.
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8];
        self.read_bytes(&mut buf)?;
        Ok(buf[0])
    }
}

/// Exclusive access to the serial bus connecting the host to the chip.
///
/// Exactly one transaction may be in flight at a time; the `&mut self`
/// receiver and the borrow held by the returned guard enforce this at
/// compile time for single-threaded hosts. A multi-threaded host must wrap
/// the whole transport in one mutual-exclusion domain, not individual byte
/// transfers.
pub trait Transport {
    type Error: core::fmt::Debug;

    /// Transaction guard type. Must release the bus when dropped.
    type Bus<'a>: Bus<Error = Self::Error>
    where
        Self: 'a;

    /// Begin a transaction: assert chip select and return the guard.
    fn transaction(&mut self) -> Result<Self::Bus<'_>, Self::Error>;
}

/// Blocking delay, used by the bring-up sequence between polls.
pub trait DelayMs {
    /// Block the calling context for at least `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
