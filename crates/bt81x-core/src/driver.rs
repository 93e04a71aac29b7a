//! Register access protocol, host commands, and the bring-up sequence.

use bt81x_hal::{Bus, DelayMs, Transport};

use crate::config::PanelConfig;
use crate::dl::DisplayList;
use crate::error::{Error, Readiness};
use crate::registers as reg;

/// Single-byte host command codes, distinct from register access.
///
/// Values are fixed by the chip and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum HostCommand {
    /// Leave standby/sleep and start the internal clocks.
    Active = 0x00,
    Standby = 0x41,
    Sleep = 0x42,
    PowerDown = 0x43,
    /// Select the external crystal as clock source.
    ClockExt = 0x44,
    /// Select the internal oscillator as clock source.
    ClockInt = 0x48,
    /// Pulse the core reset line.
    ResetPulse = 0x68,
}

/// Progress of the power-on sequence.
///
/// [`Bt81x::power_up`] walks these in order; on failure the driver is left
/// reporting the state it reached, so the caller can tell a chip that never
/// answered from one that died mid-configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringupState {
    /// No bring-up attempted, or the chip was commanded off.
    Unpowered,
    /// External clock selected.
    ClockSelected,
    /// Waiting for the identification register to report a running engine.
    PollingActive,
    /// Waiting for the CPU reset register to clear.
    PollingReset,
    /// Writing panel timing and output configuration.
    Configuring,
    /// Display live; further display lists may be built and committed.
    Rendering,
}

/// Settle time after the doubled active command, before the first poll.
/// The count and ordering (two actives, then this delay) are chip
/// convention; deviating risks bring-up failure on real hardware.
const ACTIVE_SETTLE_MS: u32 = 300;

/// Delay between readiness polls.
const POLL_INTERVAL_MS: u32 = 50;

/// Default bound on readiness polls: 20 attempts at 50 ms is one second of
/// wall time, well past anything a healthy chip needs. The original
/// protocol polls forever; the bound is this driver's addition so an
/// unresponsive chip surfaces as [`Error::Timeout`] instead of a hang.
pub const DEFAULT_POLL_ATTEMPTS: u32 = 20;

/// Backlight PWM frequency written during configuration, in Hz.
const BACKLIGHT_PWM_HZ: u16 = 0xFA;
/// Backlight PWM duty written during configuration (0..=128).
const BACKLIGHT_PWM_DUTY: u8 = 32;

/// Driver for one BT81x chip. Owns the transport for its whole lifetime.
pub struct Bt81x<T> {
    transport: T,
    state: BringupState,
    poll_attempts: u32,
}

impl<T: Transport + DelayMs> Bt81x<T> {
    /// Wrap a transport. No bus traffic happens until the first operation.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: BringupState::Unpowered,
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
        }
    }

    /// Override the readiness poll bound (minimum 1 attempt).
    pub fn set_poll_attempts(&mut self, attempts: u32) {
        self.poll_attempts = attempts.max(1);
    }

    /// Bring-up progress, or the point where a failed bring-up stopped.
    pub fn state(&self) -> BringupState {
        self.state
    }

    /// Consume the driver and return the transport.
    pub fn release(self) -> T {
        self.transport
    }

    // --- Bus protocol: address framing -----------------------------------

    /// One write transaction: 3-byte header (top bit set marks a write,
    /// bits 16..22 of the address first, then the lower bytes high-to-low)
    /// followed by the data little-endian.
    pub(crate) fn wr(&mut self, address: u32, data: &[u8]) -> Result<(), Error<T::Error>> {
        let header = [
            (((address >> 16) & 0x3F) as u8) | 0x80,
            (address >> 8) as u8,
            address as u8,
        ];
        let mut bus = self.transport.transaction()?;
        bus.write_bytes(&header)?;
        bus.write_bytes(data)?;
        Ok(())
    }

    /// One read transaction: 4-byte header (top bit clear, trailing dummy
    /// byte gives the chip a cycle to produce its first response byte),
    /// then `buf.len()` bytes shifted in.
    pub(crate) fn rd(&mut self, address: u32, buf: &mut [u8]) -> Result<(), Error<T::Error>> {
        let header = [
            ((address >> 16) & 0x3F) as u8,
            (address >> 8) as u8,
            address as u8,
            0x00,
        ];
        let mut bus = self.transport.transaction()?;
        bus.write_bytes(&header)?;
        bus.read_bytes(buf)?;
        Ok(())
    }

    pub fn wr8(&mut self, address: u32, value: u8) -> Result<(), Error<T::Error>> {
        self.wr(address, &[value])
    }

    pub fn wr16(&mut self, address: u32, value: u16) -> Result<(), Error<T::Error>> {
        self.wr(address, &value.to_le_bytes())
    }

    pub fn wr32(&mut self, address: u32, value: u32) -> Result<(), Error<T::Error>> {
        self.wr(address, &value.to_le_bytes())
    }

    pub fn rd8(&mut self, address: u32) -> Result<u8, Error<T::Error>> {
        let mut buf = [0u8; 1];
        self.rd(address, &mut buf)?;
        Ok(buf[0])
    }

    pub fn rd16(&mut self, address: u32) -> Result<u16, Error<T::Error>> {
        let mut buf = [0u8; 2];
        self.rd(address, &mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    pub fn rd32(&mut self, address: u32) -> Result<u32, Error<T::Error>> {
        let mut buf = [0u8; 4];
        self.rd(address, &mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    // --- Host commands ----------------------------------------------------

    /// Issue a host command with no parameter. Fire-and-forget: the chip
    /// sends no acknowledgment, readiness is confirmed by polling
    /// registers afterwards.
    pub fn host_command(&mut self, cmd: HostCommand) -> Result<(), Error<T::Error>> {
        self.host_command_raw(cmd as u8, 0)
    }

    /// Issue a host command carrying a parameter byte.
    pub fn host_command_param(
        &mut self,
        cmd: HostCommand,
        param: u8,
    ) -> Result<(), Error<T::Error>> {
        self.host_command_raw(cmd as u8, param)
    }

    /// Fixed 3-byte frame: command, parameter (0 if none), trailing zero.
    fn host_command_raw(&mut self, code: u8, param: u8) -> Result<(), Error<T::Error>> {
        let mut bus = self.transport.transaction()?;
        bus.write_byte(code)?;
        bus.write_byte(param)?;
        bus.write_byte(0)?;
        Ok(())
    }

    /// Put the chip in standby: clocks running, PLL off.
    pub fn standby(&mut self) -> Result<(), Error<T::Error>> {
        self.host_command(HostCommand::Standby)
    }

    /// Put the chip to sleep: clocks stopped.
    pub fn sleep(&mut self) -> Result<(), Error<T::Error>> {
        self.host_command(HostCommand::Sleep)
    }

    /// Power the core down. Requires a full [`power_up`](Self::power_up)
    /// to recover.
    pub fn power_down(&mut self) -> Result<(), Error<T::Error>> {
        self.state = BringupState::Unpowered;
        self.host_command(HostCommand::PowerDown)
    }

    /// Pulse the core reset line. Requires a full bring-up afterwards.
    pub fn reset(&mut self) -> Result<(), Error<T::Error>> {
        self.state = BringupState::Unpowered;
        self.host_command(HostCommand::ResetPulse)
    }

    // --- Identification ---------------------------------------------------

    /// Read the chip identification word from ROM.
    pub fn chip_id(&mut self) -> Result<u32, Error<T::Error>> {
        self.rd32(reg::CHIP_ID)
    }

    /// Read the measured core clock frequency in Hz.
    pub fn frequency(&mut self) -> Result<u32, Error<T::Error>> {
        self.rd32(reg::REG_FREQUENCY)
    }

    // --- Bring-up ---------------------------------------------------------

    /// Read `address` until it equals `expect`, sleeping between attempts.
    /// Bounded by the configured attempt budget.
    fn poll_rd8(
        &mut self,
        address: u32,
        expect: u8,
        which: Readiness,
    ) -> Result<(), Error<T::Error>> {
        for _ in 0..self.poll_attempts {
            if self.rd8(address)? == expect {
                return Ok(());
            }
            self.transport.delay_ms(POLL_INTERVAL_MS);
        }
        Err(Error::Timeout(which))
    }

    /// Bring the chip from an unknown power state to a live, rendering
    /// display, leaving a solid black frame on screen.
    ///
    /// Sequencing follows the chip's documented convention exactly:
    /// external clock, active twice, a 300 ms settle, then readiness
    /// polls, panel configuration, an initial display list, and finally
    /// the pixel clock write that starts timing generation. Nothing is
    /// visible on the panel until that last write.
    pub fn power_up(&mut self, config: &PanelConfig) -> Result<(), Error<T::Error>> {
        self.state = BringupState::Unpowered;

        self.host_command(HostCommand::ClockExt)?;
        self.state = BringupState::ClockSelected;

        // Issued twice by chip convention to guarantee effect.
        self.host_command(HostCommand::Active)?;
        self.host_command(HostCommand::Active)?;
        self.transport.delay_ms(ACTIVE_SETTLE_MS);

        self.state = BringupState::PollingActive;
        self.poll_rd8(reg::REG_ID, reg::ID_ACTIVE, Readiness::ChipActive)?;

        self.state = BringupState::PollingReset;
        self.poll_rd8(reg::REG_CPURESET, 0, Readiness::ResetComplete)?;

        self.state = BringupState::Configuring;
        self.configure(config)?;

        // First visible frame, then start timing generation.
        self.clear_screen(0, 0, 0)?;
        self.wr8(reg::REG_PCLK, config.pclk)?;

        self.state = BringupState::Rendering;
        Ok(())
    }

    /// Write the panel timing registers with output disabled.
    fn configure(&mut self, config: &PanelConfig) -> Result<(), Error<T::Error>> {
        // Display off and pixel clock halted while timing changes.
        self.wr16(reg::REG_GPIOX, 0)?;
        self.wr8(reg::REG_PCLK, 0)?;

        self.wr16(reg::REG_HCYCLE, config.hcycle)?;
        self.wr16(reg::REG_HOFFSET, config.hoffset)?;
        self.wr16(reg::REG_HSYNC0, config.hsync0)?;
        self.wr16(reg::REG_HSYNC1, config.hsync1)?;
        self.wr16(reg::REG_VCYCLE, config.vcycle)?;
        self.wr16(reg::REG_VOFFSET, config.voffset)?;
        self.wr16(reg::REG_VSYNC0, config.vsync0)?;
        self.wr16(reg::REG_VSYNC1, config.vsync1)?;
        self.wr8(reg::REG_SWIZZLE, config.swizzle)?;
        self.wr8(reg::REG_PCLK_POL, config.pclk_pol)?;
        self.wr8(reg::REG_CSPREAD, config.cspread)?;
        self.wr8(reg::REG_DITHER, config.dither)?;
        self.wr16(reg::REG_HSIZE, config.hsize)?;
        self.wr16(reg::REG_VSIZE, config.vsize)?;

        // Drive the display-enable line and light the backlight.
        self.wr16(reg::REG_GPIOX_DIR, reg::GPIOX_DISP)?;
        self.wr16(reg::REG_GPIOX, reg::GPIOX_DISP)?;
        self.wr16(reg::REG_PWM_HZ, BACKLIGHT_PWM_HZ)?;
        self.wr8(reg::REG_PWM_DUTY, BACKLIGHT_PWM_DUTY)?;
        Ok(())
    }

    // --- Display lists ----------------------------------------------------

    /// Start a fresh display list. The returned builder owns the write
    /// cursor, starting at offset 0.
    pub fn display_list(&mut self) -> DisplayList<'_, T> {
        DisplayList::new(self)
    }

    /// Build and commit a list that clears the screen to a solid color.
    pub fn clear_screen(&mut self, r: u8, g: u8, b: u8) -> Result<(), Error<T::Error>> {
        let mut list = self.display_list();
        list.clear_color_rgb(r, g, b)?;
        list.clear(true, true, true)?;
        list.display()?;
        list.swap()
    }
}
