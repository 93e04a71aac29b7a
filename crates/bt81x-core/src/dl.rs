//! Display-list opcode encoding and the list builder.
//!
//! A display list is an append-only stream of packed 32-bit opcodes the
//! renderer consumes in write order. The packing functions here are pure
//! and deterministic; the [`DisplayList`] builder owns the write cursor
//! and streams each opcode into display-list RAM as it is appended.
//!
//! Operand bit fields have no overflow protection in hardware: an
//! oversized value would corrupt the neighboring field. Every fallible
//! encoder below range-checks its operands and refuses to produce a
//! corrupt opcode.

use bt81x_hal::{DelayMs, Transport};

use crate::driver::Bt81x;
use crate::error::{EncodeError, Error};
use crate::registers as reg;

/// Drawing primitive selected by a [`begin`] opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Primitive {
    Bitmaps = 1,
    Points = 2,
    Lines = 3,
    LineStrip = 4,
    EdgeStripR = 5,
    EdgeStripL = 6,
    EdgeStripA = 7,
    EdgeStripB = 8,
    Rects = 9,
}

fn check(field: &'static str, value: i32, min: i32, max: i32) -> Result<(), EncodeError> {
    if value < min || value > max {
        return Err(EncodeError {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Begin drawing a primitive. Must precede its vertices.
pub const fn begin(prim: Primitive) -> u32 {
    0x1F00_0000 | prim as u32
}

/// Select the bitmap handle for following cells (0..=31).
pub fn bitmap_handle(handle: u8) -> Result<u32, EncodeError> {
    check("bitmap handle", handle as i32, 0, 31)?;
    Ok(0x0500_0000 | handle as u32)
}

/// Select a cell (glyph index) within the current bitmap (0..=127).
pub fn cell(index: u8) -> Result<u32, EncodeError> {
    check("cell index", index as i32, 0, 127)?;
    Ok(0x0600_0000 | index as u32)
}

/// Set the color the clear opcode fills with.
pub const fn clear_color_rgb(r: u8, g: u8, b: u8) -> u32 {
    0x0200_0000 | (r as u32) << 16 | (b as u32) << 8 | g as u32
}

/// Clear the color, stencil, and/or tag buffers.
pub const fn clear(color: bool, stencil: bool, tag: bool) -> u32 {
    0x2600_0000 | (color as u32) << 2 | (stencil as u32) << 1 | tag as u32
}

/// Set the draw color for following primitives.
pub const fn color_rgb(r: u8, g: u8, b: u8) -> u32 {
    0x0400_0000 | (r as u32) << 16 | (b as u32) << 8 | g as u32
}

/// Terminate the list. The renderer stops here each frame.
pub const fn display() -> u32 {
    0x0000_0000
}

/// End the current primitive.
pub const fn end() -> u32 {
    0x2100_0000
}

/// Set the point radius in 1/16 pixel units (0..=8191).
pub fn point_size(size: u16) -> Result<u32, EncodeError> {
    check("point size", size as i32, 0, 0x1FFF)?;
    Ok(0x0D00_0000 | size as u32)
}

/// Place a vertex. Coordinates are 15-bit signed fixed-point, in units
/// set by [`vertex_format`] (1/16 pixel by default): -16384..=16383.
pub fn vertex2f(x: i16, y: i16) -> Result<u32, EncodeError> {
    check("vertex x", x as i32, -16384, 16383)?;
    check("vertex y", y as i32, -16384, 16383)?;
    Ok(0x4000_0000 | ((x as u32) & 0x7FFF) << 15 | ((y as u32) & 0x7FFF))
}

/// Place a vertex with inline handle and cell. Whole-pixel coordinates
/// (0..=511), handle 0..=31, cell 0..=127.
pub fn vertex2ii(x: u16, y: u16, handle: u8, cell: u8) -> Result<u32, EncodeError> {
    check("vertex x", x as i32, 0, 511)?;
    check("vertex y", y as i32, 0, 511)?;
    check("bitmap handle", handle as i32, 0, 31)?;
    check("cell index", cell as i32, 0, 127)?;
    Ok(0x8000_0000
        | (x as u32) << 21
        | (y as u32) << 12
        | (handle as u32) << 7
        | cell as u32)
}

/// Set the fractional bits of vertex coordinates (0..=4; 4 is the
/// power-on default, 1/16 pixel).
pub fn vertex_format(frac: u8) -> Result<u32, EncodeError> {
    check("vertex format", frac as i32, 0, 4)?;
    Ok(0x2700_0000 | frac as u32)
}

/// Builder for one display list.
///
/// Owns the write cursor: created at offset 0, advanced by 4 per opcode,
/// never past the 8 KiB region. A list only becomes visible through
/// [`swap`](Self::swap); building without committing is inert. Any error
/// leaves the cursor unchanged so the whole list step can be retried.
pub struct DisplayList<'a, T: Transport + DelayMs> {
    driver: &'a mut Bt81x<T>,
    cursor: u32,
}

impl<'a, T: Transport + DelayMs> DisplayList<'a, T> {
    pub(crate) fn new(driver: &'a mut Bt81x<T>) -> Self {
        Self { driver, cursor: 0 }
    }

    /// Current write offset in bytes from the start of display-list RAM.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Append one packed opcode, advancing the cursor by 4.
    pub fn append(&mut self, opcode: u32) -> Result<(), Error<T::Error>> {
        if self.cursor + 4 > reg::RAM_DL_SIZE {
            return Err(Error::DisplayListFull {
                offset: self.cursor,
            });
        }
        self.driver.wr32(reg::RAM_DL + self.cursor, opcode)?;
        self.cursor += 4;
        Ok(())
    }

    fn append_checked(&mut self, opcode: Result<u32, EncodeError>) -> Result<(), Error<T::Error>> {
        let opcode = opcode.map_err(Error::Encode)?;
        self.append(opcode)
    }

    pub fn begin(&mut self, prim: Primitive) -> Result<(), Error<T::Error>> {
        self.append(begin(prim))
    }

    pub fn bitmap_handle(&mut self, handle: u8) -> Result<(), Error<T::Error>> {
        self.append_checked(bitmap_handle(handle))
    }

    pub fn cell(&mut self, index: u8) -> Result<(), Error<T::Error>> {
        self.append_checked(cell(index))
    }

    pub fn clear_color_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<(), Error<T::Error>> {
        self.append(clear_color_rgb(r, g, b))
    }

    pub fn clear(&mut self, color: bool, stencil: bool, tag: bool) -> Result<(), Error<T::Error>> {
        self.append(clear(color, stencil, tag))
    }

    pub fn color_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<(), Error<T::Error>> {
        self.append(color_rgb(r, g, b))
    }

    pub fn display(&mut self) -> Result<(), Error<T::Error>> {
        self.append(display())
    }

    pub fn end(&mut self) -> Result<(), Error<T::Error>> {
        self.append(end())
    }

    pub fn point_size(&mut self, size: u16) -> Result<(), Error<T::Error>> {
        self.append_checked(point_size(size))
    }

    pub fn vertex2f(&mut self, x: i16, y: i16) -> Result<(), Error<T::Error>> {
        self.append_checked(vertex2f(x, y))
    }

    pub fn vertex2ii(
        &mut self,
        x: u16,
        y: u16,
        handle: u8,
        cell_index: u8,
    ) -> Result<(), Error<T::Error>> {
        self.append_checked(vertex2ii(x, y, handle, cell_index))
    }

    pub fn vertex_format(&mut self, frac: u8) -> Result<(), Error<T::Error>> {
        self.append_checked(vertex_format(frac))
    }

    /// Draw a run of glyphs from the font at `handle`, one cell+vertex
    /// pair per byte, advancing the pen by `(dx, dy)` per glyph.
    /// Coordinates are in the units of the current vertex format.
    pub fn text(
        &mut self,
        x: i16,
        y: i16,
        dx: i16,
        dy: i16,
        handle: u8,
        text: &str,
    ) -> Result<(), Error<T::Error>> {
        self.begin(Primitive::Bitmaps)?;
        self.bitmap_handle(handle)?;
        let mut tx = x;
        let mut ty = y;
        for byte in text.bytes() {
            self.cell(byte)?;
            self.vertex2f(tx, ty)?;
            tx = tx.wrapping_add(dx);
            ty = ty.wrapping_add(dy);
        }
        self.end()
    }

    /// Commit the list: the chip swaps it in at the next frame boundary.
    /// Consumes the builder; a new list starts back at offset 0.
    pub fn swap(self) -> Result<(), Error<T::Error>> {
        self.driver.wr8(reg::REG_DLSWAP, reg::DLSWAP_FRAME)
    }
}
