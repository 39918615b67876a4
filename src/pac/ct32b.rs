//! 32-bit counter/timer (CT32B0/CT32B1) registers
//!
//! Both instances share this block layout.

use super::Reg;

/// IR: interrupt flag for match channel 0
pub const IR_MR0INT: u32 = 1 << 0;
/// TCR: counter enable
pub const TCR_CEN: u32 = 1 << 0;
/// MCR: interrupt on MR0 match
pub const MCR_MR0I: u32 = 1 << 0;
/// MCR: reset TC on MR0 match
pub const MCR_MR0R: u32 = 1 << 1;
/// MCR: reset TC on MR3 match
pub const MCR_MR3R: u32 = 1 << 10;
/// PWMC: PWM mode on match output 0
pub const PWMC_PWMEN0: u32 = 1 << 0;

/// Register block
#[repr(C)]
pub struct RegisterBlock {
    /// Interrupt register (write 1 to clear a flag)
    pub ir: Reg<u32>,
    /// Timer control register
    pub tcr: Reg<u32>,
    /// Timer counter
    pub tc: Reg<u32>,
    /// Prescale register
    pub pr: Reg<u32>,
    /// Prescale counter
    pub pc: Reg<u32>,
    /// Match control register
    pub mcr: Reg<u32>,
    /// Match register 0
    pub mr0: Reg<u32>,
    /// Match register 1
    pub mr1: Reg<u32>,
    /// Match register 2
    pub mr2: Reg<u32>,
    /// Match register 3
    pub mr3: Reg<u32>,
    /// Capture control register
    pub ccr: Reg<u32>,
    /// Capture register 0
    pub cr0: Reg<u32>,
    _reserved0: [u8; 0x0C],
    /// External match register
    pub emr: Reg<u32>,
    _reserved1: [u8; 0x30],
    /// Count control register
    pub ctcr: Reg<u32>,
    /// PWM control register
    pub pwmc: Reg<u32>,
}

#[cfg(test)]
impl RegisterBlock {
    /// A zeroed RAM copy of the block, for host tests
    pub(crate) const fn new() -> Self {
        RegisterBlock {
            ir: Reg::new(0),
            tcr: Reg::new(0),
            tc: Reg::new(0),
            pr: Reg::new(0),
            pc: Reg::new(0),
            mcr: Reg::new(0),
            mr0: Reg::new(0),
            mr1: Reg::new(0),
            mr2: Reg::new(0),
            mr3: Reg::new(0),
            ccr: Reg::new(0),
            cr0: Reg::new(0),
            _reserved0: [0; 0x0C],
            emr: Reg::new(0),
            _reserved1: [0; 0x30],
            ctcr: Reg::new(0),
            pwmc: Reg::new(0),
        }
    }
}
