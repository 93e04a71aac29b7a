#![no_std]

//! BT81x transport over `embedded-hal` 1.0.
//!
//! Adapts any [`SpiBus`] plus a chip-select [`OutputPin`] and a
//! [`DelayNs`] source to the [`bt81x_hal`] transport traits. Chip select
//! is asserted when a transaction begins and deasserted by the guard's
//! `Drop`, so the bus is released even when a transfer fails mid-way.
//!
//! The SPI bus must be configured for mode 0, MSB first, at or below the
//! chip's rated clock (30 MHz once running; 11 MHz until the external
//! clock is selected during bring-up).

use bt81x_hal::{Bus, DelayMs, Transport};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Transport error for the embedded-hal adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// SPI bus error during a transfer.
    Spi,
    /// Chip-select pin could not be driven.
    ChipSelect,
}

/// Generic SPI transport: bus + chip select + delay source.
pub struct SpiTransport<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
}

impl<SPI, CS, D> SpiTransport<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Wrap the peripherals. The chip-select pin should start high
    /// (deasserted).
    pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
        Self { spi, cs, delay }
    }

    /// Tear down and hand the peripherals back.
    pub fn release(self) -> (SPI, CS, D) {
        (self.spi, self.cs, self.delay)
    }
}

/// One in-flight transaction; chip select stays low while this lives.
pub struct SpiTransaction<'a, SPI: SpiBus, CS: OutputPin> {
    spi: &'a mut SPI,
    cs: &'a mut CS,
}

impl<SPI: SpiBus, CS: OutputPin> Bus for SpiTransaction<'_, SPI, CS> {
    type Error = TransportError;

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.spi.write(bytes).map_err(|_| TransportError::Spi)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.read(buf).map_err(|_| TransportError::Spi)
    }
}

impl<SPI: SpiBus, CS: OutputPin> Drop for SpiTransaction<'_, SPI, CS> {
    fn drop(&mut self) {
        // Deassertion must happen on every exit path; errors here have
        // nowhere to go.
        let _ = self.spi.flush();
        let _ = self.cs.set_high();
    }
}

impl<SPI, CS, D> Transport for SpiTransport<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    type Error = TransportError;
    type Bus<'a>
        = SpiTransaction<'a, SPI, CS>
    where
        Self: 'a;

    fn transaction(&mut self) -> Result<Self::Bus<'_>, Self::Error> {
        self.cs
            .set_low()
            .map_err(|_| TransportError::ChipSelect)?;
        Ok(SpiTransaction {
            spi: &mut self.spi,
            cs: &mut self.cs,
        })
    }
}

impl<SPI, CS, D> DelayMs for SpiTransport<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
