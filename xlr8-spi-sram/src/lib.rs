#![cfg_attr(not(test), no_std)]
//! Control of the XLR8 FPGA SPI SRAM controller.
//!
//! The controller exposes one 8-bit register, `MEMCR`, at data-space address
//! `0xF0`:
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +-------+-------+-----------+---+
//! | rsvd  | mode  |  clksel   | x |
//! +-------+-------+-----------+---+
//! ```
//!
//! The SRAM traffic itself goes through the regular SPI driver. This crate
//! only selects the access mode, the SPI bit clock and whether 3-byte
//! addressing is in use. Every setter is a read-modify-write of `MEMCR`;
//! nothing is cached on the Rust side.
//!
//! ```no_run
//! use xlr8_spi_sram::{XLR8SPISRAM, SPI_CLOCK_DIV2};
//!
//! XLR8SPISRAM.sequential_mode();
//! XLR8SPISRAM.clock_divider(SPI_CLOCK_DIV2);
//! XLR8SPISRAM.extended_address_enable();
//! ```
//!
//! A setter called from both thread mode and an interrupt handler races on
//! the read-modify-write; mask interrupts around such calls.

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
    }};
}

pub mod clock;
mod config;
mod error;
mod mode;
mod sram;

pub use crate::clock::*;
pub use crate::config::SramConfig;
pub use crate::error::Error;
pub use crate::mode::Mode;
pub use crate::sram::Xlr8SpiSram;

pub use xlr8_pac::spisram::{Instance, Memcr};
pub use xlr8_pac::{ByteRegister, RWRegister};

/// Data-space address of `MEMCR`.
pub const MEMCR_ADDRESS: u16 = xlr8_pac::spisram::BASE_ADDRESS;

/// Bytes per page in [`Mode::Page`]. Enforced by the SRAM, not by this crate.
pub const PAGE_SIZE: usize = 32;

/// The controller at [`MEMCR_ADDRESS`].
///
/// The facade holds no state, so every copy of this constant drives the same
/// register. It is bound to an unowned [`Memcr`] handle and leaves the
/// peripheral's `take()` bookkeeping alone.
pub const XLR8SPISRAM: Xlr8SpiSram<Memcr> = Xlr8SpiSram::new(unsafe { Memcr::conjure() });
