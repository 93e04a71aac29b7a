#![no_std]

//! Platform-agnostic driver for BT81x EVE graphics controllers.
//!
//! The chip is reached over a byte-oriented serial bus; everything
//! platform-specific (chip select, clocking, delays) lives behind the
//! [`bt81x_hal`] traits. On top of that this crate layers the register
//! and memory access protocol, the host command set, the display-list
//! encoder, and the power-on bring-up sequence.
//!
//! Typical use: wrap a transport in [`Bt81x`], call
//! [`power_up`](Bt81x::power_up) with a [`PanelConfig`], then build and
//! commit display lists each frame:
//!
//! ```ignore
//! let mut chip = Bt81x::new(transport);
//! chip.power_up(&config::RVT70_EVE3)?;
//! let mut list = chip.display_list();
//! list.clear_color_rgb(0, 0, 0)?;
//! list.clear(true, true, true)?;
//! list.display()?;
//! list.swap()?;
//! ```

pub mod config;
pub mod dl;
pub mod driver;
pub mod error;
pub mod registers;

pub use config::PanelConfig;
pub use dl::{DisplayList, Primitive};
pub use driver::{BringupState, Bt81x, HostCommand};
pub use error::{EncodeError, Error, Readiness};
