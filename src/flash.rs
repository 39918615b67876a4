//! # Flash memory
//!
//! Only the access-time register of the flash controller is exposed here.
//! [`CLKCFG::freeze`] consumes the proxy to set the wait states matching the
//! core clock it is about to switch to.
//!
//! [`CLKCFG::freeze`]: `crate::syscon::CLKCFG::freeze`

use crate::pac::{flashctrl, FLASHCTRL};

impl crate::private::Sealed for FLASHCTRL {}

/// Extension trait to constrain the [`FLASHCTRL`] peripheral
pub trait FlashExt: crate::private::Sealed {
    /// Constrains the [`FLASHCTRL`] peripheral.
    ///
    /// Consumes the [`pac::FLASHCTRL`] peripheral and converts it to a [`HAL`] internal type
    /// constraining it's public access surface to fit the design of the [`HAL`].
    ///
    /// [`pac::FLASHCTRL`]: `crate::pac::FLASHCTRL`
    /// [`HAL`]: `crate`
    fn constrain(self) -> Parts;
}

impl FlashExt for FLASHCTRL {
    fn constrain(self) -> Parts {
        // NOTE(unsafe) we own the peripheral, so the block reference is unique
        let rb = unsafe { &*FLASHCTRL::ptr() };
        Parts { cfg: CFG { rb } }
    }
}

/// Constrained FLASHCTRL peripheral
pub struct Parts {
    /// Opaque FLASHCFG register
    pub cfg: CFG,
}

/// Opaque FLASHCFG register
pub struct CFG {
    rb: &'static flashctrl::RegisterBlock,
}

impl CFG {
    /// Sets the flash access time to `wait_states + 1` system clocks
    pub(crate) fn set_wait_states(&mut self, wait_states: u32) {
        // everything above FLASHTIM is reserved and keeps its reset value
        self.rb.flashcfg.modify(|v| {
            v & !flashctrl::FLASHCFG_FLASHTIM_MASK
                | (wait_states & flashctrl::FLASHCFG_FLASHTIM_MASK)
        });
    }
}

#[cfg(test)]
impl CFG {
    pub(crate) fn mock(rb: &'static flashctrl::RegisterBlock) -> Self {
        CFG { rb }
    }
}
