//! GPIO lines on the APB ports.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use hcsr04_capture::setup::{AlternateInputSetup, OutputPinSetup, PinMask};
use tm4c123x::{gpio_porta::RegisterBlock as Port, SYSCTL};

fn enable_port_clock(sysctl: &SYSCTL, gate: u32) {
    sysctl
        .rcgcgpio
        .modify(|r, w| unsafe { w.bits(r.bits() | gate) });
}

/// A push-pull output on one line of a port.
///
/// DATA is updated read-modify-write; several lines of one port may be driven this way
/// because nothing else runs concurrently.
pub struct PortPin {
    port: &'static Port,
    mask: PinMask,
}

impl PortPin {
    pub fn output(port: &'static Port, sysctl: &SYSCTL, setup: OutputPinSetup) -> Self {
        enable_port_clock(sysctl, setup.clock_gate);
        let mask = setup.mask.bits();
        port.dir.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        port.den.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        Self {
            port,
            mask: setup.mask,
        }
    }
}

impl ErrorType for PortPin {
    type Error = Infallible;
}

impl OutputPin for PortPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mask = self.mask.bits();
        self.port.data.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mask = self.mask.bits();
        self.port.data.modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
        Ok(())
    }
}

/// Make a line a digital input handed to a peripheral through the port control mux.
pub fn alternate_input(port: &Port, sysctl: &SYSCTL, setup: AlternateInputSetup) {
    enable_port_clock(sysctl, setup.clock_gate);
    let mask = setup.mask.bits();
    port.dir.modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
    port.den.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
    port.afsel.modify(|r, w| unsafe { w.bits(r.bits() | mask) });
    port.pctl
        .modify(|r, w| unsafe { w.bits((r.bits() & !setup.pctl_mask) | setup.pctl_value) });
}
