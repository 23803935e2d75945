use libm::trunc;

const CENTIMETERS_PER_INCH: f64 = 2.54;

/// A measured range, stored in inches.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distance(f64);

impl Distance {
    /// Stands in for a reading that never came back.
    pub const OUT_OF_RANGE: Self = Self(f64::MAX);

    pub const fn from_inches(inches: f64) -> Self {
        Self(inches)
    }

    /// Convert an echo length in capture timer ticks.
    pub fn from_ticks(ticks: u32, scale_factor: f64) -> Self {
        Self(f64::from(ticks) * scale_factor)
    }

    pub const fn as_inches(self) -> f64 {
        self.0
    }

    pub fn as_centimeters(self) -> f64 {
        self.0 * CENTIMETERS_PER_INCH
    }

    /// Whole inches, fraction dropped. This is the value the LED bands are compared
    /// against. Saturates at `u32::MAX`.
    pub fn whole_inches(self) -> u32 {
        trunc(self.0) as u32
    }
}
