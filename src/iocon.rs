//! # I/O configuration and pin routing
//!
//! Typestate pins over the IOCON block. [`IoconExt::split`] ungates the GPIO
//! and IOCON clocks and hands out one owned value per configurable pad; the
//! `into_*` methods then move a pad into a concrete function. Pad writes are
//! impossible before the clocks run, because pins only exist after `split`.
//!
//! Only the pads of the DIP-28 bring-up circuit are exposed for now: the
//! open-drain I2C pad PIO0_5, the two SWD/reserved pads PIO0_10 and PIO0_11,
//! and the CT32B1_MAT0 pad PIO1_1.

use core::marker::PhantomData;

use crate::pac::{iocon, IOCON};
use crate::syscon::{Clock, AHB};

/// FUNC value routing a pad to its plain port function
const FUNC_PIO: u32 = 0b001;
/// FUNC value routing PIO1_1 to the CT32B1_MAT0 match output
const FUNC_CT32B1_MAT0: u32 = 0b011;
/// I2C pad mode: standard digital I/O
const I2CMODE_IO: u32 = 1 << 8;

/// Pad function as it comes out of reset
pub struct Reset;

/// Pad routed to its plain digital I/O function
pub struct Io;

/// Pad routed to the CT32B1_MAT0 match output
pub struct Ct32b1Mat0;

impl crate::private::Sealed for IOCON {}

/// Extension trait to split the [`IOCON`] block into its pins
pub trait IoconExt: crate::private::Sealed {
    /// Splits the IOCON block into its pin configuration handles
    ///
    /// Ungates the IOCON clock, which the pad writes need, and the GPIO
    /// clock, so the routed pins are usable right away.
    fn split(self, ahb: &mut AHB) -> Parts;
}

impl IoconExt for IOCON {
    fn split(self, ahb: &mut AHB) -> Parts {
        // NOTE(unsafe) we own the peripheral, so the block reference is unique
        let rb = unsafe { &*IOCON::ptr() };
        Parts::new(rb, ahb)
    }
}

/// Split IOCON block, with the pin clocks running
pub struct Parts {
    /// PIO0_5, the open-drain I2C pad
    pub pio0_5: PIO0_5<Reset>,
    /// SWCLK/PIO0_10
    pub swclk_pio0_10: SWCLK_PIO0_10<Reset>,
    /// R/PIO0_11
    pub r_pio0_11: R_PIO0_11<Reset>,
    /// R/PIO1_1
    pub r_pio1_1: R_PIO1_1<Reset>,
}

impl Parts {
    pub(crate) fn new(rb: &'static iocon::RegisterBlock, ahb: &mut AHB) -> Self {
        ahb.enable_clock(Clock::Gpio);
        ahb.enable_clock(Clock::Iocon);

        Parts {
            pio0_5: PIO0_5 {
                rb,
                _mode: PhantomData,
            },
            swclk_pio0_10: SWCLK_PIO0_10 {
                rb,
                _mode: PhantomData,
            },
            r_pio0_11: R_PIO0_11 {
                rb,
                _mode: PhantomData,
            },
            r_pio1_1: R_PIO1_1 {
                rb,
                _mode: PhantomData,
            },
        }
    }
}

/// Pin PIO0_5 (I2C pad, always open-drain)
pub struct PIO0_5<MODE> {
    rb: &'static iocon::RegisterBlock,
    _mode: PhantomData<MODE>,
}

impl PIO0_5<Reset> {
    /// Puts the I2C pad into standard digital I/O mode
    ///
    /// The pad stays open-drain by construction; only the I2C glitch
    /// filter/mode bits are changed, everything else keeps its state.
    pub fn into_open_drain_io(self) -> PIO0_5<Io> {
        self.rb.pio0_5.modify(|v| v | I2CMODE_IO);
        PIO0_5 {
            rb: self.rb,
            _mode: PhantomData,
        }
    }
}

/// Pin SWCLK/PIO0_10 (SWD clock out of reset)
pub struct SWCLK_PIO0_10<MODE> {
    rb: &'static iocon::RegisterBlock,
    _mode: PhantomData<MODE>,
}

impl SWCLK_PIO0_10<Reset> {
    /// Reassigns the SWD clock pad to plain PIO0_10
    ///
    /// The whole configuration word is rewritten; the pad leaves its reset
    /// (SWCLK) function entirely. Debug access over SWD is lost until the
    /// next reset.
    pub fn into_gpio(self) -> SWCLK_PIO0_10<Io> {
        self.rb.swclk_pio0_10.write(FUNC_PIO);
        SWCLK_PIO0_10 {
            rb: self.rb,
            _mode: PhantomData,
        }
    }
}

/// Pin R/PIO0_11 (reserved function out of reset)
pub struct R_PIO0_11<MODE> {
    rb: &'static iocon::RegisterBlock,
    _mode: PhantomData<MODE>,
}

impl R_PIO0_11<Reset> {
    /// Reassigns the reserved pad to plain PIO0_11
    ///
    /// The whole configuration word is rewritten.
    pub fn into_gpio(self) -> R_PIO0_11<Io> {
        self.rb.r_pio0_11.write(FUNC_PIO);
        R_PIO0_11 {
            rb: self.rb,
            _mode: PhantomData,
        }
    }
}

/// Pin R/PIO1_1 (reserved function out of reset)
pub struct R_PIO1_1<MODE> {
    rb: &'static iocon::RegisterBlock,
    _mode: PhantomData<MODE>,
}

impl R_PIO1_1<Reset> {
    /// Routes the pad to the CT32B1_MAT0 match output
    ///
    /// Only the FUNC bits are set; pull-up and the other pad settings keep
    /// their state.
    pub fn into_ct32b1_mat0(self) -> R_PIO1_1<Ct32b1Mat0> {
        self.rb.r_pio1_1.modify(|v| v | FUNC_CT32B1_MAT0);
        R_PIO1_1 {
            rb: self.rb,
            _mode: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::syscon;

    fn mock_blocks() -> (&'static iocon::RegisterBlock, &'static syscon::RegisterBlock) {
        (
            Box::leak(Box::new(iocon::RegisterBlock::new())),
            Box::leak(Box::new(syscon::RegisterBlock::new())),
        )
    }

    #[test]
    fn split_ungates_both_clocks_before_any_pad_write() {
        let (iocon_rb, syscon_rb) = mock_blocks();
        let mut ahb = AHB::mock(syscon_rb);

        let parts = Parts::new(iocon_rb, &mut ahb);

        // both gates are on while every pad word is still untouched
        let gates = 1 << 6 | 1 << 16;
        assert_eq!(syscon_rb.sysahbclkctrl.read() & gates, gates);
        assert_eq!(iocon_rb.r_pio1_1.read(), 0);

        // pad writes only happen on the pins handed out above
        let _mat0 = parts.r_pio1_1.into_ct32b1_mat0();
        assert_eq!(iocon_rb.r_pio1_1.read(), 0b011);
    }

    #[test]
    fn i2c_pad_keeps_its_other_settings() {
        let (iocon_rb, syscon_rb) = mock_blocks();
        let mut ahb = AHB::mock(syscon_rb);
        // pad word with a function already selected
        iocon_rb.pio0_5.write(0x0000_0002);
        let parts = Parts::new(iocon_rb, &mut ahb);

        let _io = parts.pio0_5.into_open_drain_io();
        assert_eq!(iocon_rb.pio0_5.read(), 0x2 | 1 << 8);
    }

    #[test]
    fn swd_pads_are_rewritten_whole() {
        let (iocon_rb, syscon_rb) = mock_blocks();
        let mut ahb = AHB::mock(syscon_rb);
        // SWCLK with pull-up enabled, as out of reset
        iocon_rb.swclk_pio0_10.write(0x0000_00D0);
        iocon_rb.r_pio0_11.write(0x0000_00D0);
        let parts = Parts::new(iocon_rb, &mut ahb);

        let _p10 = parts.swclk_pio0_10.into_gpio();
        let _p11 = parts.r_pio0_11.into_gpio();

        // full assignment, not a read-modify-write
        assert_eq!(iocon_rb.swclk_pio0_10.read(), 0b001);
        assert_eq!(iocon_rb.r_pio0_11.read(), 0b001);
    }

    #[test]
    fn match_output_routing_preserves_the_pad_settings() {
        let (iocon_rb, syscon_rb) = mock_blocks();
        let mut ahb = AHB::mock(syscon_rb);
        // pull-up enabled, as out of reset
        iocon_rb.r_pio1_1.write(0x0000_00D0);
        let parts = Parts::new(iocon_rb, &mut ahb);

        let _mat0 = parts.r_pio1_1.into_ct32b1_mat0();
        assert_eq!(iocon_rb.r_pio1_1.read(), 0xD0 | 0b011);
    }
}
