/// How long a single echo edge wait may spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitLimit {
    /// Spin until the capture flag is set, however long that takes.
    /// A missing echo hangs the measurement forever.
    Unbounded,
    /// Give up after this many flag polls and report a timeout.
    Polls(u32),
}

/// Distance bands, in inches, used to pick the lit LED.
///
/// Each threshold is the inclusive upper edge of the nearer band. Readings are compared in
/// whole inches, so anything from `far_in` up to the next whole inch still lights green.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bands {
    /// Beyond this nothing is lit.
    pub far_in: f64,
    /// Beyond this (up to `far_in`) green is lit.
    pub near_in: f64,
    /// Beyond this (up to `near_in`) blue is lit, at or below it red.
    pub close_in: f64,
}

impl Default for Bands {
    fn default() -> Self {
        Self {
            far_in: 24.0,
            near_in: 12.0,
            close_in: 6.0,
        }
    }
}

/// The configuration for the sensor and the indicator loop.
///
/// `Config::default()` matches a TM4C123 running from its 16 MHz internal oscillator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Timer clock in Hz. Both the capture timer and the delay timer run from it.
    pub clock_hz: u32,
    /// Converts echo seconds into inches of range.
    pub speed_of_sound_factor: f64,
    /// Low time before the trigger pulse, at least 10us.
    pub trigger_settle_us: u32,
    /// High time of the trigger pulse, at least 10us.
    pub trigger_pulse_us: u32,
    /// Bound applied to each of the two echo edge waits.
    pub echo_wait: WaitLimit,
    pub bands: Bands,
    /// Pause after every LED update.
    pub throttle_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clock_hz: 16_000_000,
            speed_of_sound_factor: 5882.0,
            trigger_settle_us: 12,
            trigger_pulse_us: 12,
            echo_wait: WaitLimit::Unbounded,
            bands: Bands::default(),
            throttle_ms: 10,
        }
    }
}

impl Config {
    /// Inches of range per capture timer tick.
    pub fn scale_factor(&self) -> f64 {
        (1.0 / f64::from(self.clock_hz)) * self.speed_of_sound_factor
    }

    /// Timer clock ticks in one microsecond.
    pub const fn ticks_per_us(&self) -> u32 {
        self.clock_hz / 1_000_000
    }
}
