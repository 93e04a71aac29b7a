//! Panel timing configuration.
//!
//! Plain data consumed by the bring-up sequence: sync and blanking
//! characteristics of a physical display, the pixel-clock divisor and
//! polarity, and the output conditioning flags. Constructed once and never
//! mutated.

/// Timing parameters for one physical panel.
///
/// Field widths match the register widths the bring-up sequence writes
/// them with: cycle/offset/sync/size values are 16-bit registers, the
/// rest are 8-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Total clocks per horizontal line, including blanking.
    pub hcycle: u16,
    /// Clocks from hsync start to first active pixel.
    pub hoffset: u16,
    pub hsync0: u16,
    pub hsync1: u16,
    /// Total lines per frame, including blanking.
    pub vcycle: u16,
    pub voffset: u16,
    pub vsync0: u16,
    pub vsync1: u16,
    /// RGB pad output reordering.
    pub swizzle: u8,
    /// Pixel-clock divisor; 0 halts timing generation.
    pub pclk: u8,
    /// Pixel-clock polarity: 0 = rising edge, 1 = falling edge.
    pub pclk_pol: u8,
    /// Clock-spreading enable for reduced EMI.
    pub cspread: u8,
    pub dither: u8,
    /// Active width in pixels.
    pub hsize: u16,
    /// Active height in lines.
    pub vsize: u16,
}

/// Riverdi RVT70 7.0" 800x480, EVE3 (BT815/BT816) generation.
pub const RVT70_EVE3: PanelConfig = PanelConfig {
    hcycle: 1056,
    hoffset: 46,
    hsync0: 0,
    hsync1: 10,
    vcycle: 525,
    voffset: 23,
    vsync0: 0,
    vsync1: 10,
    swizzle: 0,
    pclk: 2,
    pclk_pol: 1,
    cspread: 0,
    dither: 1,
    hsize: 800,
    vsize: 480,
};

/// Riverdi RVT70 7.0" 800x480, EVE2 (FT810-era) generation.
pub const RVT70_EVE2: PanelConfig = PanelConfig {
    hcycle: 928,
    hoffset: 88,
    hsync0: 0,
    hsync1: 48,
    vcycle: 525,
    voffset: 32,
    vsync0: 0,
    vsync1: 3,
    swizzle: 0,
    pclk: 2,
    pclk_pol: 1,
    cspread: 0,
    dither: 1,
    hsize: 800,
    vsize: 480,
};
