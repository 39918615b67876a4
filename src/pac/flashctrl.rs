//! Flash memory controller registers

use super::Reg;

/// FLASHCFG: flash access time field
pub const FLASHCFG_FLASHTIM_MASK: u32 = 0b11;

/// Register block
#[repr(C)]
pub struct RegisterBlock {
    _reserved0: [u8; 0x10],
    /// Flash configuration (access time)
    ///
    /// Bits above FLASHTIM are reserved and must keep their reset values.
    pub flashcfg: Reg<u32>,
}

#[cfg(test)]
impl RegisterBlock {
    /// A zeroed RAM copy of the block, for host tests
    pub(crate) const fn new() -> Self {
        RegisterBlock {
            _reserved0: [0; 0x10],
            flashcfg: Reg::new(0),
        }
    }
}
