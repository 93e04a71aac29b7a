//! BT81x memory map and register address table.
//!
//! The chip exposes one flat 22-bit address space partitioned into ROM,
//! general-purpose RAM, display-list RAM, the memory-mapped register bank,
//! and the coprocessor command FIFO. Only the low 22 bits of an address are
//! significant on the wire; the partition is implied by the literal range.
//!
//! All values here must match the silicon bit-for-bit. No logic lives in
//! this crate.

#![no_std]

// Memory map.
pub const RAM_G: u32 = 0x0;
pub const ROM_FONT: u32 = 0x1E_0000;
pub const ROM: u32 = 0x20_0000;
pub const ROM_FONTROOT: u32 = 0x2F_FFFC;
pub const RAM_DL: u32 = 0x30_0000;
pub const RAM_REG: u32 = 0x30_2000;
pub const RAM_CMD: u32 = 0x30_8000;
pub const RAM_ERR_REPORT: u32 = 0x30_9800;
pub const FLASH: u32 = 0x80_0000;

/// Display-list RAM capacity in bytes. Writes past `RAM_DL + RAM_DL_SIZE`
/// land in the register bank, so the driver refuses them.
pub const RAM_DL_SIZE: u32 = 8 * 1024;

/// ROM word identifying the chip family and revision.
pub const CHIP_ID: u32 = 0x0C_0000;

// Register bank. Offsets are relative to the flat address space, not to
// RAM_REG, matching the datasheet table.
pub const REG_ID: u32 = 0x30_2000;
pub const REG_FRAMES: u32 = 0x30_2004;
pub const REG_CLOCK: u32 = 0x30_2008;
pub const REG_FREQUENCY: u32 = 0x30_200C;
pub const REG_RENDERMODE: u32 = 0x30_2010;
pub const REG_SNAPY: u32 = 0x30_2014;
pub const REG_SNAPSHOT: u32 = 0x30_2018;
pub const REG_SNAPFORMAT: u32 = 0x30_201C;
pub const REG_CPURESET: u32 = 0x30_2020;
pub const REG_TAP_CRC: u32 = 0x30_2024;
pub const REG_TAP_MASK: u32 = 0x30_2028;
pub const REG_HCYCLE: u32 = 0x30_202C;
pub const REG_HOFFSET: u32 = 0x30_2030;
pub const REG_HSIZE: u32 = 0x30_2034;
pub const REG_HSYNC0: u32 = 0x30_2038;
pub const REG_HSYNC1: u32 = 0x30_203C;
pub const REG_VCYCLE: u32 = 0x30_2040;
pub const REG_VOFFSET: u32 = 0x30_2044;
pub const REG_VSIZE: u32 = 0x30_2048;
pub const REG_VSYNC0: u32 = 0x30_204C;
pub const REG_VSYNC1: u32 = 0x30_2050;
pub const REG_DLSWAP: u32 = 0x30_2054;
pub const REG_ROTATE: u32 = 0x30_2058;
pub const REG_OUTBITS: u32 = 0x30_205C;
pub const REG_DITHER: u32 = 0x30_2060;
pub const REG_SWIZZLE: u32 = 0x30_2064;
pub const REG_CSPREAD: u32 = 0x30_2068;
pub const REG_PCLK_POL: u32 = 0x30_206C;
pub const REG_PCLK: u32 = 0x30_2070;
pub const REG_TAG_X: u32 = 0x30_2074;
pub const REG_TAG_Y: u32 = 0x30_2078;
pub const REG_TAG: u32 = 0x30_207C;
pub const REG_VOL_PB: u32 = 0x30_2080;
pub const REG_VOL_SOUND: u32 = 0x30_2084;
pub const REG_SOUND: u32 = 0x30_2088;
pub const REG_PLAY: u32 = 0x30_208C;
pub const REG_GPIO_DIR: u32 = 0x30_2090;
pub const REG_GPIO: u32 = 0x30_2094;
pub const REG_GPIOX_DIR: u32 = 0x30_2098;
pub const REG_GPIOX: u32 = 0x30_209C;
pub const REG_INT_FLAGS: u32 = 0x30_20A8;
pub const REG_INT_EN: u32 = 0x30_20AC;
pub const REG_INT_MASK: u32 = 0x30_20B0;
pub const REG_PLAYBACK_START: u32 = 0x30_20B4;
pub const REG_PLAYBACK_LENGTH: u32 = 0x30_20B8;
pub const REG_PLAYBACK_READPTR: u32 = 0x30_20BC;
pub const REG_PLAYBACK_FREQ: u32 = 0x30_20C0;
pub const REG_PLAYBACK_FORMAT: u32 = 0x30_20C4;
pub const REG_PLAYBACK_LOOP: u32 = 0x30_20C8;
pub const REG_PLAYBACK_PLAY: u32 = 0x30_20CC;
pub const REG_PWM_HZ: u32 = 0x30_20D0;
pub const REG_PWM_DUTY: u32 = 0x30_20D4;
pub const REG_MACRO_0: u32 = 0x30_20D8;
pub const REG_MACRO_1: u32 = 0x30_20DC;
pub const REG_CMD_READ: u32 = 0x30_20F8;
pub const REG_CMD_WRITE: u32 = 0x30_20FC;
pub const REG_CMD_DL: u32 = 0x30_2100;
pub const REG_BIST_EN: u32 = 0x30_2174;
pub const REG_TRIM: u32 = 0x30_2180;
pub const REG_ANA_COMP: u32 = 0x30_2184;
pub const REG_SPI_WIDTH: u32 = 0x30_2188;
pub const REG_DATESTAMP: u32 = 0x30_2564;
pub const REG_CMDB_SPACE: u32 = 0x30_2574;
pub const REG_CMDB_WRITE: u32 = 0x30_2578;
pub const REG_ADAPTIVE_FRAMERATE: u32 = 0x30_257C;
pub const REG_PLAYBACK_PAUSE: u32 = 0x30_25EC;
pub const REG_FLASH_STATUS: u32 = 0x30_25F0;

/// REG_ID value once the graphics engine is running.
pub const ID_ACTIVE: u8 = 0x7C;

// REG_DLSWAP values.
pub const DLSWAP_LINE: u8 = 0x1;
pub const DLSWAP_FRAME: u8 = 0x2;

// REG_ROTATE values.
pub const ROTATE_LANDSCAPE: u8 = 0x0;
pub const ROTATE_INVERTED_LANDSCAPE: u8 = 0x1;
pub const ROTATE_PORTRAIT: u8 = 0x2;
pub const ROTATE_INVERTED_PORTRAIT: u8 = 0x3;
pub const ROTATE_MIRRORED_LANDSCAPE: u8 = 0x4;
pub const ROTATE_MIRRORED_INVERTED_LANDSCAPE: u8 = 0x5;
pub const ROTATE_MIRRORED_PORTRAIT: u8 = 0x6;
pub const ROTATE_MIRRORED_INVERTED_PORTRAIT: u8 = 0x7;

/// REG_GPIOX / REG_GPIOX_DIR bit driving the display-enable line.
pub const GPIOX_DISP: u16 = 0x8000;
