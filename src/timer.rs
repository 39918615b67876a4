//! # Timers
//!
//! Abstractions of the 32-bit counter/timer peripherals.
//! The timer module implements the [`CountDown`] and [`Periodic`] traits.
//!
//! [`CountDown`]: `embedded_hal::timer::CountDown`
//! [`Periodic`]: `embedded_hal::timer::Periodic`

use core::cmp;
use core::ops::Deref;

use void::Void;

use crate::hal::timer::{Cancel, CountDown, Periodic};
use crate::pac::ct32b::{self, IR_MR0INT, MCR_MR0I, MCR_MR0R, TCR_CEN};
use crate::pac::{CT32B0, CT32B1};
use crate::syscon::{Clock, Clocks, AHB};
use crate::time::Hertz;

/// Hardware timers
#[derive(Debug)]
pub struct Timer<TIM> {
    tim: TIM,
    clocks: Clocks,
}

/// Timer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Timer is disabled.
    Disabled,
}

/// A 32-bit counter/timer instance
///
/// Both counter/timers share one register block layout, so the instances
/// only differ in base address and clock gate.
pub trait Instance: Deref<Target = ct32b::RegisterBlock> + crate::private::Sealed {
    #[doc(hidden)]
    fn enable_clock(ahb: &mut AHB);
}

impl crate::private::Sealed for CT32B0 {}

impl Instance for CT32B0 {
    fn enable_clock(ahb: &mut AHB) {
        ahb.enable_clock(Clock::Ct32b0);
    }
}

impl crate::private::Sealed for CT32B1 {}

impl Instance for CT32B1 {
    fn enable_clock(ahb: &mut AHB) {
        ahb.enable_clock(Clock::Ct32b1);
    }
}

impl<TIM> Timer<TIM>
where
    TIM: Instance,
{
    /// Configures a counter/timer as a periodic count down timer
    pub fn new<T>(tim: TIM, timeout: T, clocks: Clocks, ahb: &mut AHB) -> Self
    where
        T: Into<Hertz>,
    {
        TIM::enable_clock(ahb);

        let mut timer = Timer { tim, clocks };
        timer.start(timeout);

        timer
    }

    /// Stops the timer
    #[inline]
    pub fn stop(&mut self) {
        self.tim.tcr.modify(|v| v & !TCR_CEN);
    }

    /// Releases the TIM peripheral
    #[inline]
    pub fn free(mut self) -> TIM {
        self.stop();
        self.tim
    }
}

impl<TIM> Periodic for Timer<TIM> where TIM: Instance {}

impl<TIM> CountDown for Timer<TIM>
where
    TIM: Instance,
{
    type Time = Hertz;

    fn start<T>(&mut self, timeout: T)
    where
        T: Into<Self::Time>,
    {
        self.stop();

        // the counter runs straight off the system clock, and its 32 bits
        // cover the whole usable range without prescaling
        let ticks = cmp::max(self.clocks.sysclk().0 / timeout.into().0, 1);

        self.tim.pr.write(0);
        // the counter resets one clock after the match, hence the - 1
        self.tim.mr0.write(ticks - 1);
        self.tim.mcr.write(MCR_MR0I | MCR_MR0R);
        self.tim.tc.write(0);
        // a stale match flag would end the first wait immediately
        self.tim.ir.write(IR_MR0INT);

        self.tim.tcr.write(TCR_CEN);
    }

    /// Wait until the match flag signals that the period elapsed,
    /// then clear it.
    fn wait(&mut self) -> nb::Result<(), Void> {
        if self.tim.ir.read() & IR_MR0INT == 0 {
            Err(nb::Error::WouldBlock)
        } else {
            self.tim.ir.write(IR_MR0INT);
            Ok(())
        }
    }
}

impl<TIM> Cancel for Timer<TIM>
where
    TIM: Instance,
{
    type Error = Error;

    fn cancel(&mut self) -> Result<(), Self::Error> {
        if self.tim.tcr.read() & TCR_CEN == 0 {
            return Err(Error::Disabled);
        }

        self.stop();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pac::syscon;
    use crate::time::U32Ext;

    struct MockTim {
        rb: &'static ct32b::RegisterBlock,
    }

    impl Deref for MockTim {
        type Target = ct32b::RegisterBlock;

        fn deref(&self) -> &Self::Target {
            self.rb
        }
    }

    impl crate::private::Sealed for MockTim {}

    impl Instance for MockTim {
        fn enable_clock(ahb: &mut AHB) {
            ahb.enable_clock(Clock::Ct32b0);
        }
    }

    fn mock_timer() -> (
        Timer<MockTim>,
        &'static ct32b::RegisterBlock,
        &'static syscon::RegisterBlock,
    ) {
        let rb = Box::leak(Box::new(ct32b::RegisterBlock::new()));
        let syscon_rb = Box::leak(Box::new(syscon::RegisterBlock::new()));
        let mut ahb = AHB::mock(syscon_rb);

        let timer = Timer::new(
            MockTim { rb },
            1.khz(),
            Clocks::mock(Hertz(48_000_000)),
            &mut ahb,
        );
        (timer, rb, syscon_rb)
    }

    #[test]
    fn new_gates_the_clock_and_starts_counting() {
        let (_timer, rb, syscon_rb) = mock_timer();

        assert_eq!(syscon_rb.sysahbclkctrl.read() & 1 << 9, 1 << 9);
        // 48 MHz / 1 kHz, counting from zero
        assert_eq!(rb.mr0.read(), 47_999);
        assert_eq!(rb.mcr.read(), MCR_MR0I | MCR_MR0R);
        assert_eq!(rb.pr.read(), 0);
        assert_eq!(rb.tcr.read(), TCR_CEN);
    }

    #[test]
    fn wait_blocks_until_the_match_flag() {
        let (mut timer, rb, _syscon_rb) = mock_timer();

        assert!(matches!(timer.wait(), Err(nb::Error::WouldBlock)));
        // a match raises the channel 0 flag
        rb.ir.write(IR_MR0INT);
        assert!(timer.wait().is_ok());
    }

    #[test]
    fn cancel_requires_a_running_timer() {
        let (mut timer, rb, _syscon_rb) = mock_timer();

        assert_eq!(timer.cancel(), Ok(()));
        assert_eq!(rb.tcr.read() & TCR_CEN, 0);
        assert_eq!(timer.cancel(), Err(Error::Disabled));
    }
}
