//! General-purpose timers driving the sensor.
//!
//! TIMER0 runs free in edge-time capture mode on the echo line, TIMER1 times out once per
//! microsecond for the delay service. Each constructor takes the PAC peripheral by value,
//! so a timer is configured exactly once.

use core::ops::Deref;

use hcsr04_capture::{
    setup::{
        CaptureTimerSetup, PeriodicTimerSetup, CAPTURE_EVENT_FLAG, CTL_ENABLE, TIMEOUT_FLAG,
    },
    EdgeCapture, PeriodicTimer,
};
use tm4c123x::{timer0, SYSCTL};

pub struct CaptureTimer<T> {
    timer: T,
}

impl<T> CaptureTimer<T>
where
    T: Deref<Target = timer0::RegisterBlock>,
{
    pub fn new(timer: T, sysctl: &SYSCTL, setup: CaptureTimerSetup) -> Self {
        sysctl
            .rcgctimer
            .modify(|r, w| unsafe { w.bits(r.bits() | setup.clock_gate) });

        // disabled while it is configured
        timer.ctl.write(|w| unsafe { w.bits(0) });
        timer.cfg.write(|w| unsafe { w.bits(setup.cfg) });
        timer.tamr.write(|w| unsafe { w.bits(setup.mode) });
        timer.ctl.modify(|r, w| unsafe { w.bits(r.bits() | setup.event) });
        timer.ctl.modify(|r, w| unsafe { w.bits(r.bits() | CTL_ENABLE) });

        Self { timer }
    }
}

impl<T> EdgeCapture for CaptureTimer<T>
where
    T: Deref<Target = timer0::RegisterBlock>,
{
    fn clear_event(&mut self) {
        self.timer.icr.write(|w| unsafe { w.bits(CAPTURE_EVENT_FLAG) });
    }

    fn event_pending(&mut self) -> bool {
        self.timer.ris.read().bits() & CAPTURE_EVENT_FLAG != 0
    }

    fn captured_ticks(&mut self) -> u32 {
        self.timer.tar.read().bits()
    }
}

pub struct MicrosecondTimer<T> {
    timer: T,
}

impl<T> MicrosecondTimer<T>
where
    T: Deref<Target = timer0::RegisterBlock>,
{
    /// Configures the timer and leaves it stopped.
    pub fn new(timer: T, sysctl: &SYSCTL, setup: PeriodicTimerSetup) -> Self {
        sysctl
            .rcgctimer
            .modify(|r, w| unsafe { w.bits(r.bits() | setup.clock_gate) });

        timer.ctl.write(|w| unsafe { w.bits(0) });
        timer.cfg.write(|w| unsafe { w.bits(setup.cfg) });
        timer.tamr.write(|w| unsafe { w.bits(setup.mode) });
        timer.tailr.write(|w| unsafe { w.bits(setup.reload) });

        Self { timer }
    }
}

impl<T> PeriodicTimer for MicrosecondTimer<T>
where
    T: Deref<Target = timer0::RegisterBlock>,
{
    fn start(&mut self) {
        self.timer.ctl.write(|w| unsafe { w.bits(CTL_ENABLE) });
    }

    fn period_elapsed(&mut self) -> bool {
        self.timer.ris.read().bits() & TIMEOUT_FLAG != 0
    }

    fn clear_period(&mut self) {
        self.timer.icr.write(|w| unsafe { w.bits(TIMEOUT_FLAG) });
    }

    fn stop(&mut self) {
        self.timer.ctl.write(|w| unsafe { w.bits(0) });
    }
}
