//! I/O configuration (IOCON) registers
//!
//! One configuration word per package pin, laid out in address order. The
//! word names follow the pin names of UM10398, including the combined
//! `SWCLK_PIO0_10`/`R_PIO0_11` style names of pads whose reset function is
//! not the plain port function.

use super::Reg;

/// Register block
#[repr(C)]
pub struct RegisterBlock {
    /// PIO2_6 configuration
    pub pio2_6: Reg<u32>,
    _reserved0: [u8; 0x04],
    /// PIO2_0 configuration
    pub pio2_0: Reg<u32>,
    /// RESET/PIO0_0 configuration
    pub reset_pio0_0: Reg<u32>,
    /// PIO0_1 configuration
    pub pio0_1: Reg<u32>,
    /// PIO1_8 configuration
    pub pio1_8: Reg<u32>,
    _reserved1: [u8; 0x04],
    /// PIO0_2 configuration
    pub pio0_2: Reg<u32>,
    /// PIO2_7 configuration
    pub pio2_7: Reg<u32>,
    /// PIO2_8 configuration
    pub pio2_8: Reg<u32>,
    /// PIO2_1 configuration
    pub pio2_1: Reg<u32>,
    /// PIO0_3 configuration
    pub pio0_3: Reg<u32>,
    /// PIO0_4 configuration (I2C pad)
    pub pio0_4: Reg<u32>,
    /// PIO0_5 configuration (I2C pad)
    pub pio0_5: Reg<u32>,
    /// PIO1_9 configuration
    pub pio1_9: Reg<u32>,
    /// PIO3_4 configuration
    pub pio3_4: Reg<u32>,
    /// PIO2_4 configuration
    pub pio2_4: Reg<u32>,
    /// PIO2_5 configuration
    pub pio2_5: Reg<u32>,
    /// PIO3_5 configuration
    pub pio3_5: Reg<u32>,
    /// PIO0_6 configuration
    pub pio0_6: Reg<u32>,
    /// PIO0_7 configuration
    pub pio0_7: Reg<u32>,
    /// PIO2_9 configuration
    pub pio2_9: Reg<u32>,
    /// PIO2_10 configuration
    pub pio2_10: Reg<u32>,
    /// PIO2_2 configuration
    pub pio2_2: Reg<u32>,
    /// PIO0_8 configuration
    pub pio0_8: Reg<u32>,
    /// PIO0_9 configuration
    pub pio0_9: Reg<u32>,
    /// SWCLK/PIO0_10 configuration
    pub swclk_pio0_10: Reg<u32>,
    /// PIO1_10 configuration
    pub pio1_10: Reg<u32>,
    /// PIO2_11 configuration
    pub pio2_11: Reg<u32>,
    /// R/PIO0_11 configuration
    pub r_pio0_11: Reg<u32>,
    /// R/PIO1_0 configuration
    pub r_pio1_0: Reg<u32>,
    /// R/PIO1_1 configuration
    pub r_pio1_1: Reg<u32>,
    /// R/PIO1_2 configuration
    pub r_pio1_2: Reg<u32>,
    /// PIO3_0 configuration
    pub pio3_0: Reg<u32>,
    /// PIO3_1 configuration
    pub pio3_1: Reg<u32>,
    /// PIO2_3 configuration
    pub pio2_3: Reg<u32>,
    /// SWDIO/PIO1_3 configuration
    pub swdio_pio1_3: Reg<u32>,
    /// PIO1_4 configuration
    pub pio1_4: Reg<u32>,
    /// PIO1_11 configuration
    pub pio1_11: Reg<u32>,
    /// PIO3_2 configuration
    pub pio3_2: Reg<u32>,
    /// PIO1_5 configuration
    pub pio1_5: Reg<u32>,
    /// PIO1_6 configuration
    pub pio1_6: Reg<u32>,
    /// PIO1_7 configuration
    pub pio1_7: Reg<u32>,
    /// PIO3_3 configuration
    pub pio3_3: Reg<u32>,
    /// SCK0 pin location select
    pub sck_loc: Reg<u32>,
    /// DSR pin location select
    pub dsr_loc: Reg<u32>,
    /// DCD pin location select
    pub dcd_loc: Reg<u32>,
    /// RI pin location select
    pub ri_loc: Reg<u32>,
}

#[cfg(test)]
impl RegisterBlock {
    /// A zeroed RAM copy of the block, for host tests
    pub(crate) const fn new() -> Self {
        RegisterBlock {
            pio2_6: Reg::new(0),
            _reserved0: [0; 0x04],
            pio2_0: Reg::new(0),
            reset_pio0_0: Reg::new(0),
            pio0_1: Reg::new(0),
            pio1_8: Reg::new(0),
            _reserved1: [0; 0x04],
            pio0_2: Reg::new(0),
            pio2_7: Reg::new(0),
            pio2_8: Reg::new(0),
            pio2_1: Reg::new(0),
            pio0_3: Reg::new(0),
            pio0_4: Reg::new(0),
            pio0_5: Reg::new(0),
            pio1_9: Reg::new(0),
            pio3_4: Reg::new(0),
            pio2_4: Reg::new(0),
            pio2_5: Reg::new(0),
            pio3_5: Reg::new(0),
            pio0_6: Reg::new(0),
            pio0_7: Reg::new(0),
            pio2_9: Reg::new(0),
            pio2_10: Reg::new(0),
            pio2_2: Reg::new(0),
            pio0_8: Reg::new(0),
            pio0_9: Reg::new(0),
            swclk_pio0_10: Reg::new(0),
            pio1_10: Reg::new(0),
            pio2_11: Reg::new(0),
            r_pio0_11: Reg::new(0),
            r_pio1_0: Reg::new(0),
            r_pio1_1: Reg::new(0),
            r_pio1_2: Reg::new(0),
            pio3_0: Reg::new(0),
            pio3_1: Reg::new(0),
            pio2_3: Reg::new(0),
            swdio_pio1_3: Reg::new(0),
            pio1_4: Reg::new(0),
            pio1_11: Reg::new(0),
            pio3_2: Reg::new(0),
            pio1_5: Reg::new(0),
            pio1_6: Reg::new(0),
            pio1_7: Reg::new(0),
            pio3_3: Reg::new(0),
            sck_loc: Reg::new(0),
            dsr_loc: Reg::new(0),
            dcd_loc: Reg::new(0),
            ri_loc: Reg::new(0),
        }
    }
}
