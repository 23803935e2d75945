use embedded_hal::digital::{OutputPin, PinState};

use crate::{Bands, Distance, Error};

/// Which LED, if any, is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    Off,
    Green,
    Blue,
    Red,
}

impl LedState {
    /// Pick the LED for a distance. Each band includes its upper threshold.
    ///
    /// The fraction is dropped before comparing, so 24.9 in counts as 24 and still
    /// lights green.
    pub fn classify(distance: Distance, bands: &Bands) -> Self {
        let d = f64::from(distance.whole_inches());
        if d > bands.far_in {
            Self::Off
        } else if d > bands.near_in {
            Self::Green
        } else if d > bands.close_in {
            Self::Blue
        } else {
            Self::Red
        }
    }

    /// Line levels as (red, green, blue).
    pub const fn lines(self) -> (bool, bool, bool) {
        match self {
            Self::Off => (false, false, false),
            Self::Green => (false, true, false),
            Self::Blue => (false, false, true),
            Self::Red => (true, false, false),
        }
    }
}

/// Three indicator LEDs, at most one of them lit.
pub struct Indicator<RED, GREEN, BLUE> {
    red: RED,
    green: GREEN,
    blue: BLUE,
    state: Option<LedState>,
}

impl<RED, GREEN, BLUE> Indicator<RED, GREEN, BLUE>
where
    RED: OutputPin,
    GREEN: OutputPin,
    BLUE: OutputPin,
{
    /// The pins are left untouched until the first `show`.
    pub fn new(red: RED, green: GREEN, blue: BLUE) -> Self {
        Self {
            red,
            green,
            blue,
            state: None,
        }
    }

    /// The last state shown, `None` before the first `show`.
    pub fn state(&self) -> Option<LedState> {
        self.state
    }

    /// Drive all three lines for `state`. Lines going dark are written before the one
    /// being lit, so two LEDs are never on together.
    pub fn show(&mut self, state: LedState) -> Result<(), Error> {
        let (red, green, blue) = state.lines();
        for level in [false, true] {
            if red == level {
                drive(&mut self.red, level)?;
            }
            if green == level {
                drive(&mut self.green, level)?;
            }
            if blue == level {
                drive(&mut self.blue, level)?;
            }
        }
        self.state = Some(state);
        Ok(())
    }

    pub fn release(self) -> (RED, GREEN, BLUE) {
        (self.red, self.green, self.blue)
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) -> Result<(), Error> {
    pin.set_state(PinState::from(on)).map_err(|_| Error::Led)
}
