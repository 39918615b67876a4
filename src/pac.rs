//! # Peripheral access
//!
//! Minimal register-level model of the LPC111x blocks this crate drives:
//! SYSCON, IOCON, the two 32-bit counter/timers and the flash controller.
//! The layout of each [`RegisterBlock`] follows the memory map in UM10398.
//!
//! Ownership works like any svd2rust generated API: [`Peripherals::take`]
//! hands out the singletons once, each singleton dereferences to its
//! memory-mapped register block.
//!
//! [`RegisterBlock`]: `syscon::RegisterBlock`

use core::marker::PhantomData;
use core::ops::Deref;

use cortex_m::interrupt;
use vcell::VolatileCell;

pub mod ct32b;
pub mod flashctrl;
pub mod iocon;
pub mod syscon;

/// A single 32-bit hardware register
///
/// Reads and writes go through [`VolatileCell`], so the compiler neither
/// elides nor reorders the accesses.
#[repr(transparent)]
pub struct Reg<T>
where
    T: Copy,
{
    value: VolatileCell<T>,
}

impl<T> Reg<T>
where
    T: Copy,
{
    /// Reads the register
    #[inline(always)]
    pub fn read(&self) -> T {
        self.value.get()
    }

    /// Replaces the register contents with `value`
    #[inline(always)]
    pub fn write(&self, value: T) {
        self.value.set(value);
    }

    /// Reads the register, maps the value and writes it back
    #[inline(always)]
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        self.value.set(f(self.value.get()));
    }
}

#[cfg(test)]
impl<T> Reg<T>
where
    T: Copy,
{
    /// A register cell living in plain RAM, for running drivers against
    /// mock register blocks on the host
    pub(crate) const fn new(value: T) -> Self {
        Reg {
            value: VolatileCell::new(value),
        }
    }
}

/// System configuration block
pub struct SYSCON {
    _marker: PhantomData<*const ()>,
}

unsafe impl Send for SYSCON {}

impl SYSCON {
    /// Returns a pointer to the register block
    #[inline(always)]
    pub const fn ptr() -> *const syscon::RegisterBlock {
        0x4004_8000 as *const _
    }
}

impl Deref for SYSCON {
    type Target = syscon::RegisterBlock;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        unsafe { &*Self::ptr() }
    }
}

/// I/O configuration block
pub struct IOCON {
    _marker: PhantomData<*const ()>,
}

unsafe impl Send for IOCON {}

impl IOCON {
    /// Returns a pointer to the register block
    #[inline(always)]
    pub const fn ptr() -> *const iocon::RegisterBlock {
        0x4004_4000 as *const _
    }
}

impl Deref for IOCON {
    type Target = iocon::RegisterBlock;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        unsafe { &*Self::ptr() }
    }
}

/// Flash memory controller
pub struct FLASHCTRL {
    _marker: PhantomData<*const ()>,
}

unsafe impl Send for FLASHCTRL {}

impl FLASHCTRL {
    /// Returns a pointer to the register block
    #[inline(always)]
    pub const fn ptr() -> *const flashctrl::RegisterBlock {
        0x4003_C000 as *const _
    }
}

impl Deref for FLASHCTRL {
    type Target = flashctrl::RegisterBlock;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        unsafe { &*Self::ptr() }
    }
}

/// 32-bit counter/timer 0
pub struct CT32B0 {
    _marker: PhantomData<*const ()>,
}

unsafe impl Send for CT32B0 {}

impl CT32B0 {
    /// Returns a pointer to the register block
    #[inline(always)]
    pub const fn ptr() -> *const ct32b::RegisterBlock {
        0x4001_4000 as *const _
    }
}

impl Deref for CT32B0 {
    type Target = ct32b::RegisterBlock;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        unsafe { &*Self::ptr() }
    }
}

/// 32-bit counter/timer 1
pub struct CT32B1 {
    _marker: PhantomData<*const ()>,
}

unsafe impl Send for CT32B1 {}

impl CT32B1 {
    /// Returns a pointer to the register block
    #[inline(always)]
    pub const fn ptr() -> *const ct32b::RegisterBlock {
        0x4001_8000 as *const _
    }
}

impl Deref for CT32B1 {
    type Target = ct32b::RegisterBlock;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        unsafe { &*Self::ptr() }
    }
}

static mut DEVICE_PERIPHERALS: bool = false;

/// All device peripherals covered by this crate
#[allow(non_snake_case)]
pub struct Peripherals {
    /// System configuration
    pub SYSCON: SYSCON,
    /// I/O configuration
    pub IOCON: IOCON,
    /// Flash memory controller
    pub FLASHCTRL: FLASHCTRL,
    /// 32-bit counter/timer 0
    pub CT32B0: CT32B0,
    /// 32-bit counter/timer 1
    pub CT32B1: CT32B1,
}

impl Peripherals {
    /// Returns all the peripherals, *once*
    #[inline]
    pub fn take() -> Option<Self> {
        interrupt::free(|_| {
            if unsafe { DEVICE_PERIPHERALS } {
                None
            } else {
                Some(unsafe { Peripherals::steal() })
            }
        })
    }

    /// Unchecked version of [`Peripherals::take`]
    ///
    /// # Safety
    ///
    /// Each of the returned peripherals must be used at most once.
    #[inline]
    pub unsafe fn steal() -> Self {
        DEVICE_PERIPHERALS = true;

        Peripherals {
            SYSCON: SYSCON {
                _marker: PhantomData,
            },
            IOCON: IOCON {
                _marker: PhantomData,
            },
            FLASHCTRL: FLASHCTRL {
                _marker: PhantomData,
            },
            CT32B0: CT32B0 {
                _marker: PhantomData,
            },
            CT32B1: CT32B1 {
                _marker: PhantomData,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset<B, R>(base: &B, reg: &Reg<R>) -> usize
    where
        R: Copy,
    {
        reg as *const _ as usize - base as *const B as usize
    }

    #[test]
    fn syscon_offsets_match_the_memory_map() {
        let rb = syscon::RegisterBlock::new();
        assert_eq!(offset(&rb, &rb.syspllctrl), 0x008);
        assert_eq!(offset(&rb, &rb.syspllstat), 0x00C);
        assert_eq!(offset(&rb, &rb.syspllclksel), 0x040);
        assert_eq!(offset(&rb, &rb.syspllclkuen), 0x044);
        assert_eq!(offset(&rb, &rb.mainclksel), 0x070);
        assert_eq!(offset(&rb, &rb.mainclkuen), 0x074);
        assert_eq!(offset(&rb, &rb.sysahbclkdiv), 0x078);
        assert_eq!(offset(&rb, &rb.sysahbclkctrl), 0x080);
        assert_eq!(offset(&rb, &rb.pdruncfg), 0x238);
    }

    #[test]
    fn iocon_offsets_match_the_memory_map() {
        let rb = iocon::RegisterBlock::new();
        assert_eq!(offset(&rb, &rb.pio2_6), 0x000);
        assert_eq!(offset(&rb, &rb.reset_pio0_0), 0x00C);
        assert_eq!(offset(&rb, &rb.pio0_2), 0x01C);
        assert_eq!(offset(&rb, &rb.pio0_5), 0x034);
        assert_eq!(offset(&rb, &rb.swclk_pio0_10), 0x068);
        assert_eq!(offset(&rb, &rb.r_pio0_11), 0x074);
        assert_eq!(offset(&rb, &rb.r_pio1_1), 0x07C);
        assert_eq!(offset(&rb, &rb.swdio_pio1_3), 0x090);
        assert_eq!(offset(&rb, &rb.ri_loc), 0x0BC);
    }

    #[test]
    fn ct32b_offsets_match_the_memory_map() {
        let rb = ct32b::RegisterBlock::new();
        assert_eq!(offset(&rb, &rb.ir), 0x000);
        assert_eq!(offset(&rb, &rb.tcr), 0x004);
        assert_eq!(offset(&rb, &rb.tc), 0x008);
        assert_eq!(offset(&rb, &rb.pr), 0x00C);
        assert_eq!(offset(&rb, &rb.mcr), 0x014);
        assert_eq!(offset(&rb, &rb.mr0), 0x018);
        assert_eq!(offset(&rb, &rb.mr3), 0x024);
        assert_eq!(offset(&rb, &rb.emr), 0x03C);
        assert_eq!(offset(&rb, &rb.ctcr), 0x070);
        assert_eq!(offset(&rb, &rb.pwmc), 0x074);
    }

    #[test]
    fn flashctrl_offsets_match_the_memory_map() {
        let rb = flashctrl::RegisterBlock::new();
        assert_eq!(offset(&rb, &rb.flashcfg), 0x010);
    }
}
