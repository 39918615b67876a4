//! # System configuration (SYSCON)
//!
//! Clock gating for the peripheral blocks and the main clock tree.
//!
//! [`SysconExt::constrain`] splits the block into the [`AHB`] gate proxy and
//! the [`CLKCFG`] clock configuration. Out of reset the core runs from the
//! 12 MHz internal RC oscillator; [`CLKCFG::freeze`] can multiply that up
//! through the system PLL.

use crate::flash::CFG;
use crate::pac::{syscon, SYSCON};
use crate::time::Hertz;

/// Internal RC oscillator frequency
const IRC: u32 = 12_000_000; // Hz

/// Extension trait that constrains the [`SYSCON`] peripheral
pub trait SysconExt: crate::private::Sealed {
    /// Constrains the `SYSCON` peripheral so it plays nicely with the other abstractions
    fn constrain(self) -> Syscon;
}

impl crate::private::Sealed for SYSCON {}

impl SysconExt for SYSCON {
    fn constrain(self) -> Syscon {
        // NOTE(unsafe) we own the peripheral, so the block reference is unique
        let rb = unsafe { &*SYSCON::ptr() };
        Syscon {
            ahb: AHB { rb },
            clkcfg: CLKCFG { rb, sysclk: None },
        }
    }
}

/// Constrained SYSCON peripheral
pub struct Syscon {
    /// Peripheral clock gates (SYSAHBCLKCTRL)
    pub ahb: AHB,
    /// Main clock configuration
    pub clkcfg: CLKCFG,
}

/// Peripheral clock gates (SYSAHBCLKCTRL)
pub struct AHB {
    rb: &'static syscon::RegisterBlock,
}

impl AHB {
    /// Ungates the clock of a peripheral block
    ///
    /// Only ever sets bits in SYSAHBCLKCTRL; all other gates keep their
    /// state.
    pub fn enable_clock(&mut self, clock: Clock) {
        self.rb.sysahbclkctrl.modify(|v| v | clock.mask());
    }
}

#[cfg(test)]
impl AHB {
    pub(crate) fn mock(rb: &'static syscon::RegisterBlock) -> Self {
        AHB { rb }
    }
}

/// Peripheral blocks with a gate in SYSAHBCLKCTRL
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Clock {
    /// GPIO ports
    Gpio,
    /// 16-bit counter/timer 0
    Ct16b0,
    /// 16-bit counter/timer 1
    Ct16b1,
    /// 32-bit counter/timer 0
    Ct32b0,
    /// 32-bit counter/timer 1
    Ct32b1,
    /// I/O configuration block
    Iocon,
}

impl Clock {
    pub(crate) fn mask(self) -> u32 {
        1 << match self {
            Clock::Gpio => 6,
            Clock::Ct16b0 => 7,
            Clock::Ct16b1 => 8,
            Clock::Ct32b0 => 9,
            Clock::Ct32b1 => 10,
            Clock::Iocon => 16,
        }
    }
}

/// Main clock configuration
pub struct CLKCFG {
    rb: &'static syscon::RegisterBlock,
    sysclk: Option<u32>,
}

impl CLKCFG {
    /// Sets the system (core) frequency
    ///
    /// The IRC is the only supported reference, so the frequency must be a
    /// multiple of 12 MHz, at most 48 MHz. Leaving it unset keeps the core
    /// on the IRC with the PLL powered down.
    pub fn sysclk<F>(mut self, freq: F) -> Self
    where
        F: Into<Hertz>,
    {
        self.sysclk = Some(freq.into().0);
        self
    }

    /// Returns the effective sysclk rate and optional PLL divider settings (MSEL, PSEL).
    fn calc_sysclk(&self) -> (u32, Option<(u32, u32)>) {
        match self.sysclk {
            None | Some(IRC) => (IRC, None),
            Some(target) => {
                assert!(target % IRC == 0 && target <= 48_000_000);

                let msel_bits = target / IRC - 1;

                // the CCO must end up within 156..=320 MHz, with
                // FCCO = 2 * P * sysclk and P one of 1, 2, 4, 8
                let mut psel_bits = None;
                for (bits, p) in [1u32, 2, 4, 8].iter().copied().enumerate() {
                    let fcco = 2 * p * target;
                    if (156_000_000..=320_000_000).contains(&fcco) {
                        psel_bits = Some(bits as u32);
                        break;
                    }
                }
                // every multiple of 12 MHz up to 48 MHz has a valid post divider
                let psel_bits = psel_bits.unwrap();

                (target, Some((msel_bits, psel_bits)))
            }
        }
    }

    /// Freezes the clock configuration, making it effective
    pub fn freeze(self, cfg: &mut CFG) -> Clocks {
        let (sysclk, pll) = self.calc_sysclk();

        // flash access time first, the faster clock only after
        cfg.set_wait_states(if sysclk <= 20_000_000 {
            0b00
        } else if sysclk <= 40_000_000 {
            0b01
        } else {
            0b10
        });

        if let Some((msel_bits, psel_bits)) = pll {
            let rb = self.rb;

            // power up the PLL and feed it from the IRC
            rb.pdruncfg.modify(|v| v & !syscon::PDRUNCFG_SYSPLL_PD);
            rb.syspllclksel.write(syscon::SYSPLLCLKSEL_IRC);
            rb.syspllclkuen.write(0);
            rb.syspllclkuen.write(1);

            rb.syspllctrl.write(psel_bits << 5 | msel_bits);
            while rb.syspllstat.read() & syscon::SYSPLLSTAT_LOCK == 0 {}

            // undivided PLL output as the main clock
            rb.sysahbclkdiv.write(1);
            rb.mainclksel.write(syscon::MAINCLKSEL_PLL_OUTPUT);
            rb.mainclkuen.write(0);
            rb.mainclkuen.write(1);
        }

        Clocks {
            sysclk: Hertz(sysclk),
        }
    }
}

/// Frozen clock frequencies
///
/// The existence of this value indicates that the clock configuration can no longer be changed
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    sysclk: Hertz,
}

impl Clocks {
    /// Returns the system (core) frequency
    pub fn sysclk(&self) -> Hertz {
        self.sysclk
    }
}

#[cfg(test)]
impl Clocks {
    pub(crate) const fn mock(sysclk: Hertz) -> Self {
        Clocks { sysclk }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::flashctrl;

    fn mock_syscon() -> &'static syscon::RegisterBlock {
        Box::leak(Box::new(syscon::RegisterBlock::new()))
    }

    fn mock_flash_cfg() -> (CFG, &'static flashctrl::RegisterBlock) {
        let rb = Box::leak(Box::new(flashctrl::RegisterBlock::new()));
        (CFG::mock(rb), rb)
    }

    #[test]
    fn gate_bits_match_the_clock_control_layout() {
        assert_eq!(Clock::Gpio.mask(), 1 << 6);
        assert_eq!(Clock::Ct16b0.mask(), 1 << 7);
        assert_eq!(Clock::Ct16b1.mask(), 1 << 8);
        assert_eq!(Clock::Ct32b0.mask(), 1 << 9);
        assert_eq!(Clock::Ct32b1.mask(), 1 << 10);
        assert_eq!(Clock::Iocon.mask(), 1 << 16);
    }

    #[test]
    fn enable_clock_only_sets_the_requested_gates() {
        let rb = mock_syscon();
        // core gates as they come out of reset
        rb.sysahbclkctrl.write(0x1F);

        let mut ahb = AHB::mock(rb);
        ahb.enable_clock(Clock::Gpio);
        ahb.enable_clock(Clock::Iocon);
        assert_eq!(rb.sysahbclkctrl.read(), 0x1F | 1 << 6 | 1 << 16);

        // enabling another gate leaves the previous ones on
        ahb.enable_clock(Clock::Ct32b1);
        assert_eq!(rb.sysahbclkctrl.read(), 0x1F | 1 << 6 | 1 << 10 | 1 << 16);
    }

    #[test]
    fn pll_settings_are_derived_from_the_target() {
        let rb = mock_syscon();

        let calc = |sysclk| CLKCFG { rb, sysclk }.calc_sysclk();
        assert_eq!(calc(None), (12_000_000, None));
        assert_eq!(calc(Some(12_000_000)), (12_000_000, None));
        // MSEL is one less than the multiplier, PSEL keeps the CCO in range
        assert_eq!(calc(Some(24_000_000)), (24_000_000, Some((1, 0b10))));
        assert_eq!(calc(Some(36_000_000)), (36_000_000, Some((2, 0b10))));
        assert_eq!(calc(Some(48_000_000)), (48_000_000, Some((3, 0b01))));
    }

    #[test]
    fn freeze_at_48_mhz_brings_up_the_pll() {
        let rb = mock_syscon();
        // lock indication is immediate on the mock
        rb.syspllstat.write(syscon::SYSPLLSTAT_LOCK);
        // PLL powered down, as after reset
        rb.pdruncfg.write(syscon::PDRUNCFG_SYSPLL_PD);
        let (mut cfg, flash_rb) = mock_flash_cfg();

        let clocks = CLKCFG {
            rb,
            sysclk: Some(48_000_000),
        }
        .freeze(&mut cfg);

        assert_eq!(clocks.sysclk().0, 48_000_000);
        // MSEL = 3, PSEL = 0b01
        assert_eq!(rb.syspllctrl.read(), 0x23);
        assert_eq!(rb.pdruncfg.read() & syscon::PDRUNCFG_SYSPLL_PD, 0);
        assert_eq!(rb.syspllclksel.read(), syscon::SYSPLLCLKSEL_IRC);
        assert_eq!(rb.syspllclkuen.read(), 1);
        assert_eq!(rb.mainclksel.read(), syscon::MAINCLKSEL_PLL_OUTPUT);
        assert_eq!(rb.mainclkuen.read(), 1);
        assert_eq!(rb.sysahbclkdiv.read(), 1);
        // three system clocks of flash access time at 48 MHz
        assert_eq!(flash_rb.flashcfg.read() & 0b11, 0b10);
    }

    #[test]
    fn freeze_defaults_to_the_irc() {
        let rb = mock_syscon();
        let (mut cfg, flash_rb) = mock_flash_cfg();

        let clocks = CLKCFG { rb, sysclk: None }.freeze(&mut cfg);

        assert_eq!(clocks.sysclk().0, 12_000_000);
        // the PLL is left alone
        assert_eq!(rb.syspllctrl.read(), 0);
        assert_eq!(rb.mainclksel.read(), syscon::MAINCLKSEL_IRC);
        // a single access cycle is enough at 12 MHz
        assert_eq!(flash_rb.flashcfg.read() & 0b11, 0b00);
    }
}
