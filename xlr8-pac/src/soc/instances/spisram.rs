#![allow(non_snake_case, non_upper_case_globals)]
#![allow(non_camel_case_types)]
//! SPISRAM

pub use super::super::peripherals::spisram::Instance;
pub use super::super::peripherals::spisram::{RegisterBlock, ResetValues};
pub use super::super::peripherals::spisram::MEMCR;

use crate::ByteRegister;

/// Data-space address of the SPISRAM block (`MEMCR` sits at offset 0).
pub const BASE_ADDRESS: u16 = 0xf0;

/// Access functions for the SPISRAM peripheral instance
pub mod SPISRAM {
    use super::ResetValues;
    use super::Instance;

    const INSTANCE: Instance = Instance {
        addr: super::BASE_ADDRESS,
        _marker: ::core::marker::PhantomData,
    };

    /// Reset values for each field in SPISRAM
    ///
    /// Byte mode, clock select `100` (clk/2), extended addressing off.
    pub const reset: ResetValues = ResetValues {
        MEMCR: 0x08,
    };

    #[allow(renamed_and_removed_lints)]
    #[allow(private_no_mangle_statics)]
    #[no_mangle]
    static mut SPISRAM_TAKEN: bool = false;

    /// Safe access to SPISRAM
    ///
    /// This function returns `Some(Instance)` if this instance is not
    /// currently taken, and `None` if it is. This ensures that if you
    /// do get `Some(Instance)`, you are ensured unique access to
    /// the peripheral and there cannot be data races (unless other
    /// code uses `unsafe`, of course). When you're done with it, you
    /// can call `release(instance)` to return it.
    ///
    /// `Instance` itself dereferences to a `RegisterBlock`, which
    /// provides access to the peripheral's registers.
    #[inline]
    pub fn take() -> Option<Instance> {
        critical_section::with(|_| unsafe {
            if SPISRAM_TAKEN {
                None
            } else {
                SPISRAM_TAKEN = true;
                Some(INSTANCE)
            }
        })
    }

    /// Release exclusive access to SPISRAM
    ///
    /// This function allows you to return an `Instance` so that it
    /// is available to `take()` again. This function will panic if
    /// you return a different `Instance` or if this instance is not
    /// already taken.
    #[inline]
    pub fn release(inst: Instance) {
        critical_section::with(|_| unsafe {
            if SPISRAM_TAKEN && inst.addr == INSTANCE.addr {
                SPISRAM_TAKEN = false;
            } else {
                panic!("Released a peripheral which was not taken");
            }
        });
    }

    /// Unsafely steal SPISRAM
    ///
    /// This function is similar to take() but forcibly takes the
    /// Instance, marking it as taken irregardless of its previous
    /// state.
    #[inline]
    pub unsafe fn steal() -> Instance {
        SPISRAM_TAKEN = true;
        INSTANCE
    }

    /// Unsafely obtains an instance of SPISRAM
    ///
    /// This will not check if `take()` or `steal()` have already been called
    /// before. It is the caller's responsibility to use the returned instance
    /// in a safe way that does not conflict with other instances.
    #[inline]
    pub const unsafe fn conjure() -> Instance {
        INSTANCE
    }
}

/// Raw pointer to SPISRAM
///
/// Dereferencing this is unsafe because you are not ensured unique
/// access to the peripheral, so you may encounter data races with
/// other users of this peripheral. It is up to you to ensure you
/// will not cause data races.
pub const SPISRAM: *const RegisterBlock = BASE_ADDRESS as usize as *const _;

/// Unowned handle to `MEMCR`, reached through the raw [`SPISRAM`] pointer.
///
/// Unlike `Instance` it can never be passed to `SPISRAM::release`, so holding
/// one does not interfere with `take()`.
#[derive(Clone, Copy)]
pub struct Memcr {
    _private: (),
}

impl Memcr {
    /// Unsafely obtains a handle to `MEMCR`
    ///
    /// The handle bypasses `take()`. It is the caller's responsibility to
    /// keep read-modify-write sequences from racing with other users of the
    /// register, e.g. by masking interrupts around them.
    #[inline]
    pub const unsafe fn conjure() -> Self {
        Memcr { _private: () }
    }

    /// Data-space address of the register.
    #[inline(always)]
    pub const fn address(&self) -> u16 {
        BASE_ADDRESS
    }
}

impl ByteRegister for Memcr {
    #[inline(always)]
    fn load(&self) -> u8 {
        unsafe { (*SPISRAM).MEMCR.read() }
    }

    #[inline(always)]
    fn store(&self, value: u8) {
        unsafe { (*SPISRAM).MEMCR.write(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteRegister, RWRegister};

    #[test]
    fn instance_points_at_the_control_register() {
        let inst = unsafe { SPISRAM::conjure() };
        assert_eq!(inst.addr, 0xf0);
        assert_eq!(SPISRAM as usize, 0xf0);
    }

    #[test]
    fn memcr_handle_addresses_the_register_block() {
        let memcr = unsafe { Memcr::conjure() };
        assert_eq!(memcr.address(), BASE_ADDRESS);
        assert_eq!(core::mem::size_of::<Memcr>(), 0);
    }

    #[test]
    fn take_hands_out_a_single_instance() {
        let inst = SPISRAM::take().unwrap();
        assert!(SPISRAM::take().is_none());
        SPISRAM::release(inst);

        let inst = SPISRAM::take().unwrap();
        SPISRAM::release(inst);
    }

    #[test]
    fn reset_value_decodes_to_documented_defaults() {
        let memcr = SPISRAM::reset.MEMCR;
        assert_eq!((memcr & MEMCR::mode::mask) >> MEMCR::mode::offset, MEMCR::mode::RW::Byte);
        assert_eq!((memcr & MEMCR::clksel::mask) >> MEMCR::clksel::offset, 0b100);
        assert_eq!(memcr & MEMCR::extaddr::mask, MEMCR::extaddr::RW::Disabled);
        assert_eq!(memcr & MEMCR::reserved::mask, 0);
    }

    #[test]
    fn register_block_fields_line_up_with_memcr() {
        let block = RegisterBlock {
            MEMCR: RWRegister::new(SPISRAM::reset.MEMCR),
        };
        assert_eq!(core::mem::size_of::<RegisterBlock>(), 1);
        assert_eq!(block.MEMCR.load(), 0x08);
        block.MEMCR.store(MEMCR::mode::RW::Page << MEMCR::mode::offset);
        assert_eq!(block.MEMCR.read(), 0x20);
    }
}
