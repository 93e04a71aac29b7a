//! Chip memory map and register addresses.
//!
//! Re-exported from the `bt81x-registers` crate (single source of truth).

pub use bt81x_registers::*;
