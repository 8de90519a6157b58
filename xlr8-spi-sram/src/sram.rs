use xlr8_pac::spisram::{Instance, MEMCR, SPISRAM};
use xlr8_pac::ByteRegister;

use crate::{ClockDivider, Error, Mode, SramConfig};

// Each setter keeps the other defined fields and drops the reserved bits.
const KEEP_ON_MODE: u8 = MEMCR::clksel::mask | MEMCR::extaddr::mask;
const KEEP_ON_CLOCK: u8 = MEMCR::mode::mask | MEMCR::extaddr::mask;
const KEEP_ON_EXTADDR_OFF: u8 = MEMCR::mode::mask | MEMCR::clksel::mask;

/// Setters and getters over the `MEMCR` control register.
///
/// `R` is the register itself: [`Memcr`](xlr8_pac::spisram::Memcr) or an
/// owned [`Instance`] on the device, any other [`ByteRegister`] in tests.
pub struct Xlr8SpiSram<R> {
    memcr: R,
}

impl<R> Xlr8SpiSram<R> {
    /// Wraps `memcr`. Does not touch the register.
    pub const fn new(memcr: R) -> Self {
        Xlr8SpiSram { memcr }
    }

    /// The wrapped register handle.
    pub fn register(&self) -> &R {
        &self.memcr
    }

    /// Gives back the register handle.
    pub fn free(self) -> R {
        self.memcr
    }
}

impl Xlr8SpiSram<Instance> {
    /// Claims the controller, or `None` if it is already claimed.
    pub fn take() -> Option<Self> {
        SPISRAM::take().map(Self::new)
    }

    /// Returns the controller so it can be claimed again.
    pub fn release(self) {
        SPISRAM::release(self.memcr)
    }
}

impl<R: ByteRegister> Xlr8SpiSram<R> {
    fn modify(&self, f: impl FnOnce(u8) -> u8) {
        let old = self.memcr.load();
        let new = f(old);
        trace!("MEMCR {:#04x} -> {:#04x}", old, new);
        self.memcr.store(new);
    }

    /// Byte mode (`00`): command and address ahead of every byte.
    ///
    /// Clock select and extended address are kept.
    pub fn byte_mode(&self) {
        self.set_mode(Mode::Byte)
    }

    /// Page mode (`10`): the address auto-increments within a 32-byte page.
    pub fn page_mode(&self) {
        self.set_mode(Mode::Page)
    }

    /// Sequential mode (`01`): the address auto-increments over the whole array.
    pub fn sequential_mode(&self) {
        self.set_mode(Mode::Sequential)
    }

    /// Selects `mode`. Clock select and extended address are kept.
    pub fn set_mode(&self, mode: Mode) {
        self.modify(|memcr| (memcr & KEEP_ON_MODE) | mode.bits())
    }

    /// Writes the low 3 bits of `code` to the clock select field.
    ///
    /// Higher bits are dropped so they never reach the mode field. Mode and
    /// extended address are kept.
    pub fn clock_divider(&self, code: u8) {
        self.modify(|memcr| {
            (memcr & KEEP_ON_CLOCK) | ((code << MEMCR::clksel::offset) & MEMCR::clksel::mask)
        })
    }

    /// Selects the SPI bit clock from a typed divider.
    pub fn set_clock(&self, divider: ClockDivider) {
        self.clock_divider(divider.code())
    }

    /// Switches to 3-byte addressing. Leaves every other bit alone.
    pub fn extended_address_enable(&self) {
        self.modify(|memcr| memcr | MEMCR::extaddr::mask)
    }

    /// Switches to 2-byte addressing. Mode and clock select are kept.
    pub fn extended_address_disable(&self) {
        self.modify(|memcr| memcr & KEEP_ON_EXTADDR_OFF)
    }

    /// Enables or disables 3-byte addressing.
    pub fn set_extended_address(&self, enabled: bool) {
        if enabled {
            self.extended_address_enable()
        } else {
            self.extended_address_disable()
        }
    }

    /// Writes every field in one store. Reserved bits end up clear.
    pub fn configure(&self, config: &SramConfig) {
        let bits = config.bits();
        trace!("MEMCR <- {:#04x}", bits);
        self.memcr.store(bits);
    }

    /// Raw register value.
    pub fn bits(&self) -> u8 {
        self.memcr.load()
    }

    /// Current access mode; fails if the field holds the reserved encoding.
    pub fn mode(&self) -> Result<Mode, Error> {
        Mode::try_from((self.bits() & MEMCR::mode::mask) >> MEMCR::mode::offset)
    }

    /// Current clock select code.
    pub fn clock(&self) -> ClockDivider {
        ClockDivider::from_field((self.bits() & MEMCR::clksel::mask) >> MEMCR::clksel::offset)
    }

    /// Whether 3-byte addressing is selected.
    pub fn extended_address_enabled(&self) -> bool {
        self.bits() & MEMCR::extaddr::mask != 0
    }

    /// Decodes the whole register.
    pub fn config(&self) -> Result<SramConfig, Error> {
        SramConfig::from_bits(self.bits())
    }
}
