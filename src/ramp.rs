//! # Duty-cycle ramp
//!
//! [`DutyRamp`] is the sweep pattern of the bring-up demo: an infinite
//! iterator of duty percents that climbs to 100, descends to 0 and climbs
//! again, one step per item.

/// Infinite triangle sweep over duty percents
///
/// The first item is the starting value itself; each endpoint is yielded
/// exactly once per visit (…, 99, 100, 99, … and …, 1, 0, 1, …).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyRamp {
    duty: u8,
    rising: bool,
    primed: bool,
}

impl DutyRamp {
    /// Starts a sweep at `start` percent, climbing first
    ///
    /// Starting values above 100 clamp to 100.
    pub fn new(start: u8) -> Self {
        DutyRamp {
            duty: start.min(100),
            rising: true,
            primed: false,
        }
    }
}

impl Iterator for DutyRamp {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if !self.primed {
            self.primed = true;
            return Some(self.duty);
        }

        if self.rising && self.duty == 100 {
            self.rising = false;
        } else if !self.rising && self.duty == 0 {
            self.rising = true;
        }

        self.duty = if self.rising {
            self.duty + 1
        } else {
            self.duty - 1
        };

        Some(self.duty)
    }
}
