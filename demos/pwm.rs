//! Ramps the duty cycle on the CT32B1_MAT0 output (PIO1_1, DIP-28 pin 10)
//! from 50 % up to 100 %, back down to 0 % and up again, forever. The PWM
//! cycle frequency is a fixed 30 kHz.
//! Target board: LPC1114FN28 breadboard bring-up
#![no_std]
#![no_main]

use panic_semihosting as _;

use cortex_m_rt::entry;

use lpc111x_hal as hal;

use hal::delay::Delay;
use hal::pac;
use hal::prelude::*;
use hal::pwm;
use hal::ramp::DutyRamp;

/// Hold time per ramp step
const STEP_MS: u16 = 20;

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    // Clock tree: 48 MHz off the internal RC through the PLL
    let mut flash = dp.FLASHCTRL.constrain();
    let mut syscon = dp.SYSCON.constrain();
    let clocks = syscon.clkcfg.sysclk(48.mhz()).freeze(&mut flash.cfg);

    // Pin routing; split ungates the GPIO and IOCON clocks first
    let pins = dp.IOCON.split(&mut syscon.ahb);
    let _od = pins.pio0_5.into_open_drain_io();
    let _io10 = pins.swclk_pio0_10.into_gpio();
    let _io11 = pins.r_pio0_11.into_gpio();
    let mat0 = pins.r_pio1_1.into_ct32b1_mat0();

    // 30 kHz PWM on CT32B1, output on PIO1_1
    let channel = pwm::ct32b1(dp.CT32B1, clocks, &mut syscon.ahb);
    let mut channel = channel.output_to_pio1_1(mat0);

    let mut delay = Delay::new(cp.SYST, clocks);

    for duty in DutyRamp::new(50) {
        channel.set_duty_percent(duty);
        delay.delay_ms(STEP_MS);
    }
    // DutyRamp never runs dry
    unreachable!()
}
