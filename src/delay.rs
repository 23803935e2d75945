use embedded_hal::delay::DelayNs;

use crate::timer::PeriodicTimer;

/// Busy-wait delays counted off a one-microsecond periodic timer.
///
/// Every call starts the timer, waits for the requested number of periods and stops
/// it again. Loop overhead is not compensated, so a delay is never shorter than asked.
pub struct TimerDelay<T> {
    timer: T,
}

impl<T: PeriodicTimer> TimerDelay<T> {
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    pub fn release(self) -> T {
        self.timer
    }

    fn spin_periods(&mut self, periods: u64) {
        self.timer.start();
        for _ in 0..periods {
            while !self.timer.period_elapsed() {
                core::hint::spin_loop();
            }
            self.timer.clear_period();
        }
        self.timer.stop();
    }
}

impl<T: PeriodicTimer> DelayNs for TimerDelay<T> {
    /// Rounded up to whole microseconds.
    fn delay_ns(&mut self, ns: u32) {
        self.spin_periods(u64::from(ns.div_ceil(1_000)));
    }

    fn delay_us(&mut self, us: u32) {
        self.spin_periods(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.spin_periods(u64::from(ms) * 1_000);
    }
}
