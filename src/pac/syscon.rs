//! System configuration (SYSCON) registers

use super::Reg;

/// SYSPLLSTAT: PLL lock flag
pub const SYSPLLSTAT_LOCK: u32 = 1 << 0;
/// SYSPLLCLKSEL: IRC oscillator as PLL input
pub const SYSPLLCLKSEL_IRC: u32 = 0b00;
/// MAINCLKSEL: IRC oscillator as main clock
pub const MAINCLKSEL_IRC: u32 = 0b00;
/// MAINCLKSEL: PLL output as main clock
pub const MAINCLKSEL_PLL_OUTPUT: u32 = 0b11;
/// PDRUNCFG: system PLL power-down
pub const PDRUNCFG_SYSPLL_PD: u32 = 1 << 7;

/// Register block
#[repr(C)]
pub struct RegisterBlock {
    _reserved0: [u8; 0x08],
    /// System PLL control
    pub syspllctrl: Reg<u32>,
    /// System PLL status
    pub syspllstat: Reg<u32>,
    _reserved1: [u8; 0x30],
    /// System PLL clock source select
    pub syspllclksel: Reg<u32>,
    /// System PLL clock source update enable
    pub syspllclkuen: Reg<u32>,
    _reserved2: [u8; 0x28],
    /// Main clock source select
    pub mainclksel: Reg<u32>,
    /// Main clock source update enable
    pub mainclkuen: Reg<u32>,
    /// System clock divider
    pub sysahbclkdiv: Reg<u32>,
    _reserved3: [u8; 0x04],
    /// System clock control (peripheral clock gates)
    pub sysahbclkctrl: Reg<u32>,
    _reserved4: [u8; 0x1B4],
    /// Power configuration
    pub pdruncfg: Reg<u32>,
}

#[cfg(test)]
impl RegisterBlock {
    /// A zeroed RAM copy of the block, for host tests
    pub(crate) const fn new() -> Self {
        RegisterBlock {
            _reserved0: [0; 0x08],
            syspllctrl: Reg::new(0),
            syspllstat: Reg::new(0),
            _reserved1: [0; 0x30],
            syspllclksel: Reg::new(0),
            syspllclkuen: Reg::new(0),
            _reserved2: [0; 0x28],
            mainclksel: Reg::new(0),
            mainclkuen: Reg::new(0),
            sysahbclkdiv: Reg::new(0),
            _reserved3: [0; 0x04],
            sysahbclkctrl: Reg::new(0),
            _reserved4: [0; 0x1B4],
            pdruncfg: Reg::new(0),
        }
    }
}
