use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{Distance, EdgeCapture, Error, Hcsr04, Indicator, LedState};

/// The outcome of one pass of the indicator loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub distance: Distance,
    pub state: LedState,
}

/// Measures, lights the matching LED and waits, over and over.
pub struct RangeIndicator<TRIGPIN, CAPTURE, DELAY, RED, GREEN, BLUE> {
    sensor: Hcsr04<TRIGPIN, CAPTURE, DELAY>,
    leds: Indicator<RED, GREEN, BLUE>,
}

impl<TRIGPIN, CAPTURE, DELAY, RED, GREEN, BLUE>
    RangeIndicator<TRIGPIN, CAPTURE, DELAY, RED, GREEN, BLUE>
where
    TRIGPIN: OutputPin,
    CAPTURE: EdgeCapture,
    DELAY: DelayNs,
    RED: OutputPin,
    GREEN: OutputPin,
    BLUE: OutputPin,
{
    pub fn new(sensor: Hcsr04<TRIGPIN, CAPTURE, DELAY>, leds: Indicator<RED, GREEN, BLUE>) -> Self {
        Self { sensor, leds }
    }

    /// One iteration: measure, update the LEDs, then wait `Config::throttle_ms`.
    ///
    /// A failed measurement is treated as nothing in range and turns every LED off.
    /// Only an LED write failure is returned, after the throttle delay has run.
    pub fn step(&mut self) -> Result<Reading, Error> {
        let distance = match self.sensor.measure() {
            Ok(distance) => distance,
            Err(e) => {
                warn!("Measurement error: {}", e);
                Distance::OUT_OF_RANGE
            }
        };

        let state = LedState::classify(distance, &self.sensor.config().bands);
        let shown = self.leds.show(state);
        debug!("Distance: {} in -> {}", distance.as_inches(), state);

        let throttle_ms = self.sensor.config().throttle_ms;
        self.sensor.delay().delay_ms(throttle_ms);

        shown.map(|()| Reading { distance, state })
    }

    /// Run the loop forever.
    pub fn run(&mut self) -> ! {
        info!("Range indicator running");
        loop {
            if let Err(e) = self.step() {
                warn!("LED update error: {}", e);
            }
        }
    }

    pub fn release(self) -> (Hcsr04<TRIGPIN, CAPTURE, DELAY>, Indicator<RED, GREEN, BLUE>) {
        (self.sensor, self.leds)
    }
}
