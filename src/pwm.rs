//! # Pulse-width modulation
//!
//! Single-edge PWM on 32-bit counter/timer CT32B1. Match register 3 sets
//! the cycle length: its match resets the counter and it is not pinned out,
//! so it is free to act as the period reference. Match register 0 drives
//! the CT32B1_MAT0 output. The pin resets high at the start of each cycle
//! and drops on the MR0 match, so a smaller match value means a longer high
//! phase; the duty setters invert their input accordingly.
//!
//! [`ct32b1`] brings the counter up at the fixed 30 kHz cycle frequency and
//! 0 % duty. The channel starts out detached; routing the output pin with
//! [`PwmChannel::output_to_pio1_1`] unlocks the duty-cycle operations.

use core::marker::PhantomData;

use embedded_hal::PwmPin;

use crate::iocon::{Ct32b1Mat0, R_PIO1_1};
use crate::pac::ct32b::{self, MCR_MR3R, PWMC_PWMEN0, TCR_CEN};
use crate::pac::CT32B1;
use crate::syscon::{Clock, Clocks, AHB};

/// PWM cycle frequency on the match output
const PWM_FREQ: u32 = 30_000; // Hz

/// Channel without its match output pin attached
pub struct NoPin;

/// Channel with the match output routed to a package pin
pub struct WithPin;

/// One PWM channel of a 32-bit counter/timer
pub struct PwmChannel<TIM, PIN> {
    rb: &'static ct32b::RegisterBlock,
    resolution: u32,
    _tim: PhantomData<TIM>,
    _pin: PhantomData<PIN>,
}

/// Configures CT32B1 for single-edge PWM on match channel 0
///
/// The counter runs straight off the system clock and resets on the MR3
/// match, so one cycle is `sysclk / 30 kHz` counts (1600 at 48 MHz). That
/// count is also the duty resolution. The duty compare starts parked at the
/// full count, which keeps the output at 0 % until the first request.
pub fn ct32b1(_tim: CT32B1, clocks: Clocks, ahb: &mut AHB) -> PwmChannel<CT32B1, NoPin> {
    // NOTE(unsafe) we own the peripheral, so the block reference is unique
    let rb = unsafe { &*CT32B1::ptr() };
    PwmChannel::init(rb, clocks, ahb)
}

impl PwmChannel<CT32B1, NoPin> {
    pub(crate) fn init(
        rb: &'static ct32b::RegisterBlock,
        clocks: Clocks,
        ahb: &mut AHB,
    ) -> Self {
        ahb.enable_clock(Clock::Ct32b1);

        let resolution = clocks.sysclk().0 / PWM_FREQ;

        rb.mr3.write(resolution);
        // full-count compare, 0 % duty to begin with
        rb.mr0.write(resolution);
        // the counter resets on MR3 only; MR0 stays an independent compare
        rb.mcr.write(MCR_MR3R);
        rb.pr.write(0);
        rb.tc.write(0);
        rb.pwmc.write(PWMC_PWMEN0);
        // the counter only starts once every compare above is in place
        rb.tcr.write(TCR_CEN);

        PwmChannel {
            rb,
            resolution,
            _tim: PhantomData,
            _pin: PhantomData,
        }
    }

    /// Connects the match output to PIO1_1
    ///
    /// Takes the routed pin as proof that IOCON points the pad at
    /// CT32B1_MAT0. Duty operations are only available afterwards.
    pub fn output_to_pio1_1(self, _pin: R_PIO1_1<Ct32b1Mat0>) -> PwmChannel<CT32B1, WithPin> {
        PwmChannel {
            rb: self.rb,
            resolution: self.resolution,
            _tim: PhantomData,
            _pin: PhantomData,
        }
    }
}

impl<TIM> PwmChannel<TIM, WithPin> {
    /// Sets the duty cycle in percent
    ///
    /// Requests above 100 % clamp to 100 %. The match value is the inverted
    /// request: 0 % parks the compare at the full count so it never matches
    /// before the cycle reset, 100 % puts it at zero so the output stays
    /// high for the whole cycle.
    pub fn set_duty_percent(&mut self, percent: u8) {
        let percent = u32::from(percent.min(100));
        self.rb.mr0.write(self.resolution / 100 * (100 - percent));
    }
}

impl<TIM> PwmPin for PwmChannel<TIM, WithPin> {
    type Duty = u32;

    /// Takes the match output out of PWM mode
    fn disable(&mut self) {
        self.rb.pwmc.modify(|v| v & !PWMC_PWMEN0);
    }

    /// Puts the match output back under PWM control
    fn enable(&mut self) {
        self.rb.pwmc.modify(|v| v | PWMC_PWMEN0);
    }

    fn get_max_duty(&self) -> Self::Duty {
        self.resolution
    }

    fn get_duty(&self) -> Self::Duty {
        self.resolution - self.rb.mr0.read()
    }

    /// Sets the duty cycle in counts out of [`get_max_duty`]
    ///
    /// Requests above the resolution clamp to it.
    ///
    /// [`get_max_duty`]: `PwmPin::get_max_duty`
    fn set_duty(&mut self, duty: Self::Duty) {
        self.rb.mr0.write(self.resolution - duty.min(self.resolution));
    }
}
