//! # hcsr04-capture
//!
//! This crate provides a blocking driver for the HC-SR04 ultrasonic distance sensor that times the
//! echo pulse with a hardware edge-capture timer, plus a small range indicator that lights one of
//! three LEDs depending on how far away the nearest object is.
//!
//! The driver owns no registers. The board supplies:
//!
//! - the trigger line as an `embedded_hal::digital::OutputPin`,
//! - a free-running timer latching its count on both echo edges, via [`EdgeCapture`],
//! - a delay, usually a [`TimerDelay`] built on a one-microsecond [`PeriodicTimer`].
//!
//! Distances are reported in inches.
//!
//! ## Features
//!
//! - `defmt`: log through `defmt` and derive `defmt::Format` on the public types.
//!
//! ## Known limitations
//!
//! - With the default `WaitLimit::Unbounded` a missing echo blocks `measure` forever. Set
//!   `Config::echo_wait` to `WaitLimit::Polls(n)` to get `Error::Timeout` instead.
//! - The elapsed tick count is a wrapping 32-bit subtraction. If the capture counter wraps between
//!   the two edges the result is a huge, wrong distance. This is not detected.
//!
//! # Example
//!
//! ```rust, ignore
//! #![no_std]
//! #![no_main]
//!
//! use hcsr04_capture::{Config, Hcsr04, Indicator, RangeIndicator, TimerDelay};
//! use {defmt_rtt as _, panic_probe as _};
//!
//! #[cortex_m_rt::entry]
//! fn main() -> ! {
//!     let (trigger, capture, periodic, red, green, blue) = board::init();
//!
//!     let sensor = Hcsr04::new(trigger, capture, Config::default(), TimerDelay::new(periodic));
//!     let leds = Indicator::new(red, green, blue);
//!
//!     RangeIndicator::new(sensor, leds).run()
//! }
//! ```

#![no_std]

#[macro_use]
mod fmt;

mod config;
mod control;
mod delay;
mod distance;
mod error;
mod indicator;
pub mod setup;
mod timer;

pub use config::{Bands, Config, WaitLimit};
pub use control::{RangeIndicator, Reading};
pub use delay::TimerDelay;
pub use distance::Distance;
pub use error::{Edge, Error};
pub use indicator::{Indicator, LedState};
pub use timer::{wait_until, EdgeCapture, PeriodicTimer, Timeout};

use embedded_hal::{delay::DelayNs, digital::OutputPin};

/// The HC-SR04 ultrasonic distance sensor driver.
///
/// # Note
///
/// `measure` waits for the rising and then the falling echo edge. How long each wait may take is
/// set by `Config::echo_wait`.
pub struct Hcsr04<TRIGPIN, CAPTURE, DELAY> {
    trigger: TRIGPIN,
    capture: CAPTURE,
    config: Config,
    delay: DELAY,
}

impl<TRIGPIN, CAPTURE, DELAY> Hcsr04<TRIGPIN, CAPTURE, DELAY>
where
    TRIGPIN: OutputPin,
    CAPTURE: EdgeCapture,
    DELAY: DelayNs,
{
    /// Initialize a new sensor.
    /// Requires the trigger pin and a capture timer whose input is wired to the echo pin.
    /// Requires a config.
    /// Requires a delay that implements DelayNs, used for the trigger pulse.
    pub fn new(trigger: TRIGPIN, capture: CAPTURE, config: Config, delay: DELAY) -> Self {
        Self {
            trigger,
            capture,
            config,
            delay,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The delay used for the trigger pulse, shared with whoever paces the measurements.
    pub fn delay(&mut self) -> &mut DELAY {
        &mut self.delay
    }

    pub fn release(self) -> (TRIGPIN, CAPTURE, DELAY) {
        (self.trigger, self.capture, self.delay)
    }

    /// Drive the trigger low, then high, then low again, holding each of the first two levels
    /// for the configured time.
    fn pulse_trigger(&mut self) -> Result<(), Error> {
        self.trigger.set_low().map_err(|_| Error::Trigger)?;
        self.delay.delay_us(self.config.trigger_settle_us);
        self.trigger.set_high().map_err(|_| Error::Trigger)?;
        self.delay.delay_us(self.config.trigger_pulse_us);
        self.trigger.set_low().map_err(|_| Error::Trigger)
    }

    /// Clear the capture flag, wait for the next edge and return the tick it was latched at.
    fn capture_edge(&mut self, edge: Edge) -> Result<u32, Error> {
        self.capture.clear_event();
        let capture = &mut self.capture;
        wait_until(|| capture.event_pending(), self.config.echo_wait)
            .map_err(|Timeout| Error::Timeout(edge))?;
        Ok(self.capture.captured_ticks())
    }

    /// Trigger the sensor and return the echo length in capture timer ticks.
    pub fn measure_ticks(&mut self) -> Result<u32, Error> {
        self.pulse_trigger()?;

        let start = self.capture_edge(Edge::Rising)?;
        let end = self.capture_edge(Edge::Falling)?;
        trace!("echo edges at {} and {}", start, end);

        Ok(end.wrapping_sub(start))
    }

    /// Measure the distance to the nearest object, in inches.
    pub fn measure(&mut self) -> Result<Distance, Error> {
        let ticks = self.measure_ticks()?;
        Ok(Distance::from_ticks(ticks, self.config.scale_factor()))
    }
}
