//! Volatile register cells and the byte access seam used by drivers.

use vcell::VolatileCell;

/// A read-write register of type T.
///
/// Every `read` is a volatile load and every `write` a volatile store, so the
/// compiler never elides, merges or caches accesses to the location.
#[repr(transparent)]
pub struct RWRegister<T> {
    register: VolatileCell<T>,
}

impl<T: Copy> RWRegister<T> {
    /// Creates a register in ordinary memory holding `value`.
    ///
    /// Hardware registers are never constructed this way; they are reached
    /// through a peripheral `Instance`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        RWRegister {
            register: VolatileCell::new(value),
        }
    }

    /// Reads the value of the register.
    #[inline(always)]
    pub fn read(&self) -> T {
        self.register.get()
    }

    /// Writes a new value to the register.
    #[inline(always)]
    pub fn write(&self, val: T) {
        self.register.set(val)
    }
}

/// Byte-wide storage behind a control register.
///
/// Drivers are generic over this trait so the same read-modify-write code runs
/// against the memory-mapped register on the device and against a plain byte
/// in tests. Implementations must forward each call to the underlying location:
/// no caching, merging or dropping of loads and stores.
pub trait ByteRegister {
    /// Loads the current register value.
    fn load(&self) -> u8;

    /// Stores `value` into the register.
    fn store(&self, value: u8);
}

impl ByteRegister for RWRegister<u8> {
    #[inline(always)]
    fn load(&self) -> u8 {
        self.read()
    }

    #[inline(always)]
    fn store(&self, value: u8) {
        self.write(value)
    }
}

impl<R: ByteRegister + ?Sized> ByteRegister for &R {
    #[inline(always)]
    fn load(&self) -> u8 {
        (**self).load()
    }

    #[inline(always)]
    fn store(&self, value: u8) {
        (**self).store(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rw_register_round_trips_through_volatile_cell() {
        let reg = RWRegister::new(0x5au8);
        assert_eq!(reg.read(), 0x5a);
        reg.write(0xa5);
        assert_eq!(reg.read(), 0xa5);
    }

    #[test]
    fn byte_register_forwards_through_references() {
        let reg = RWRegister::new(0u8);
        let by_ref = &reg;
        by_ref.store(0x3c);
        assert_eq!(reg.load(), 0x3c);
        assert_eq!((&by_ref).load(), 0x3c);
    }

    #[test]
    fn register_has_the_layout_of_its_value() {
        assert_eq!(core::mem::size_of::<RWRegister<u8>>(), 1);
        assert_eq!(core::mem::align_of::<RWRegister<u8>>(), 1);
    }
}
