#![allow(non_snake_case, non_upper_case_globals)]
#![allow(non_camel_case_types)]
//! SPISRAM
//!
//! Control block of the FPGA SPI SRAM controller. The controller issues the
//! SRAM command, address and data phases itself; firmware only picks the
//! access mode, the SPI bit clock and the address width here.

use crate::{ByteRegister, RWRegister};
use core::marker::PhantomData;
use static_assertions::const_assert_eq;

/// Memory control register.
pub mod MEMCR {
    /// Extended (3-byte) SRAM addressing. 2-byte addressing when clear.
    pub mod extaddr {
        /// Offset (0 bits)
        pub const offset: u8 = 0;

        /// Mask (1 bit: 0x1 << 0)
        pub const mask: u8 = 0x1 << offset;

        /// Read-only values (empty)
        pub mod R {}
        /// Write-only values (empty)
        pub mod W {}
        /// Read-write values
        pub mod RW {
            /// 0b0: 2-byte addressing
            pub const Disabled: u8 = 0b0;

            /// 0b1: 3-byte addressing
            pub const Enabled: u8 = 0b1;
        }
    }

    /// SPI bit clock select, encoded as SPI2X:SPR1:SPR0 of the host MCU.
    pub mod clksel {
        /// Offset (1 bits)
        pub const offset: u8 = 1;

        /// Mask (3 bit: 0x7 << 1)
        pub const mask: u8 = 0x7 << offset;

        /// Read-only values (empty)
        pub mod R {}
        /// Write-only values (empty)
        pub mod W {}
        /// Read-write values (empty)
        pub mod RW {}
    }

    /// SRAM access mode.
    pub mod mode {
        /// Offset (4 bits)
        pub const offset: u8 = 4;

        /// Mask (2 bit: 0x3 << 4)
        pub const mask: u8 = 0x3 << offset;

        /// Read-only values (empty)
        pub mod R {}
        /// Write-only values (empty)
        pub mod W {}
        /// Read-write values
        pub mod RW {
            /// 0b00: command and address before every byte
            pub const Byte: u8 = 0b00;

            /// 0b10: address auto-increments, wrapping within a 32-byte page
            pub const Page: u8 = 0b10;

            /// 0b01: address auto-increments across the whole array
            pub const Sequential: u8 = 0b01;
        }
    }

    /// Reserved.
    pub mod reserved {
        /// Offset (6 bits)
        pub const offset: u8 = 6;

        /// Mask (2 bit: 0x3 << 6)
        pub const mask: u8 = 0x3 << offset;

        /// Read-only values (empty)
        pub mod R {}
        /// Write-only values (empty)
        pub mod W {}
        /// Read-write values (empty)
        pub mod RW {}
    }
}

const_assert_eq!(MEMCR::extaddr::mask & MEMCR::clksel::mask, 0);
const_assert_eq!(MEMCR::clksel::mask & MEMCR::mode::mask, 0);
const_assert_eq!(MEMCR::mode::mask & MEMCR::reserved::mask, 0);
const_assert_eq!(
    MEMCR::extaddr::mask | MEMCR::clksel::mask | MEMCR::mode::mask | MEMCR::reserved::mask,
    0xff
);

#[repr(C)]
pub struct RegisterBlock {
    /// Memory control register.
    pub MEMCR: RWRegister<u8>,
}

pub struct ResetValues {
    pub MEMCR: u8,
}

pub struct Instance {
    pub(crate) addr: u16,
    pub(crate) _marker: PhantomData<*const RegisterBlock>,
}

impl Instance {
    /// Data-space address of the register block.
    #[inline(always)]
    pub const fn address(&self) -> u16 {
        self.addr
    }
}

impl ::core::ops::Deref for Instance {
    type Target = RegisterBlock;
    #[inline(always)]
    fn deref(&self) -> &RegisterBlock {
        unsafe { &*(self.addr as usize as *const _) }
    }
}

impl ByteRegister for Instance {
    #[inline(always)]
    fn load(&self) -> u8 {
        self.MEMCR.read()
    }

    #[inline(always)]
    fn store(&self, value: u8) {
        self.MEMCR.write(value)
    }
}
