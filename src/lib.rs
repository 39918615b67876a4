/*!
 # lpc111x-hal

 Hardware abstraction layer for the NXP LPC111x family (ARM Cortex-M0),
 covering the peripherals of the DIP-28 PWM bring-up circuit: the SYSCON
 clock tree, IOCON pin routing, the two 32-bit counter/timers and SysTick.

 The usual bring-up order is

 1. [`pac::Peripherals::take`] for the register-level singletons,
 2. constrain and freeze the clock tree ([`syscon`], [`flash`]),
 3. split the IOCON block and route the pins ([`iocon`]),
 4. bring up the drivers ([`pwm`], [`timer`], [`delay`]).

 # Selecting the right chip

 The peripheral map is common to the whole family, so the library itself
 builds without a device feature. Generating the linker script (the `ld`
 feature) needs the flash and RAM sizes and requires one of

 *   `lpc1111`
 *   `lpc1112`
 *   `lpc1113`
 *   `lpc1114`
 *   `lpc1115`

 Example: the common DIP-28 part is an LPC1114FN28/102, so you want to
 expand your call to `cargo` with `--features ld,rt,lpc1114`.
*/
#![cfg_attr(not(test), no_std)]
#![allow(non_camel_case_types)]

pub use embedded_hal as hal;

pub use nb;
pub use nb::block;

pub mod delay;
pub mod flash;
pub mod iocon;
pub mod pac;
pub mod prelude;
pub mod pwm;
pub mod ramp;
pub mod syscon;
pub mod time;
pub mod timer;

mod private {
    /// Bound on the extension traits, implementable inside the crate only
    pub trait Sealed {}
}
