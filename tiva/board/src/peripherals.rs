//! One-time bring-up of every peripheral the range indicator uses.
//!
//! Runs from the 16 MHz internal oscillator the chip boots on; no clock setup is done.

use hcsr04_capture::{
    setup::{AlternateInputSetup, CaptureTimerSetup, OutputPinSetup, PeriodicTimerSetup},
    Config,
};
use tm4c123x::{Peripherals, GPIO_PORTA, GPIO_PORTB, GPIO_PORTF, TIMER0, TIMER1};

use crate::{
    gptm::{CaptureTimer, MicrosecondTimer},
    port::{alternate_input, PortPin},
};

const PORT_A: u8 = 0;
const PORT_B: u8 = 1;
const PORT_F: u8 = 5;

/// PA4
const TRIGGER: OutputPinSetup = OutputPinSetup::new(PORT_A, 4);
/// PB6, T0CCP0
const ECHO: AlternateInputSetup = AlternateInputSetup::new(PORT_B, 6, 7);
const RED_LED: OutputPinSetup = OutputPinSetup::new(PORT_F, 1);
const BLUE_LED: OutputPinSetup = OutputPinSetup::new(PORT_F, 2);
const GREEN_LED: OutputPinSetup = OutputPinSetup::new(PORT_F, 3);

const ECHO_TIMER: u8 = 0;
const DELAY_TIMER: u8 = 1;

pub struct Board {
    pub trigger: PortPin,
    pub capture: CaptureTimer<TIMER0>,
    pub delay_timer: MicrosecondTimer<TIMER1>,
    pub red: PortPin,
    pub green: PortPin,
    pub blue: PortPin,
}

pub fn init(p: Peripherals, config: &Config) -> Board {
    let sysctl = p.SYSCTL;

    let _ports = (p.GPIO_PORTA, p.GPIO_PORTB, p.GPIO_PORTF);
    // SAFETY: `Peripherals::take` succeeded once, so nothing else reaches these ports. The
    // firmware is single-threaded with no interrupts, and each pin built below only writes
    // the DATA bit of its own mask.
    let (port_a, port_b, port_f) = unsafe {
        (
            &*GPIO_PORTA::ptr(),
            &*GPIO_PORTB::ptr(),
            &*GPIO_PORTF::ptr(),
        )
    };

    let red = PortPin::output(port_f, &sysctl, RED_LED);
    let blue = PortPin::output(port_f, &sysctl, BLUE_LED);
    let green = PortPin::output(port_f, &sysctl, GREEN_LED);
    alternate_input(port_b, &sysctl, ECHO);
    let trigger = PortPin::output(port_a, &sysctl, TRIGGER);

    let capture = CaptureTimer::new(p.TIMER0, &sysctl, CaptureTimerSetup::both_edges(ECHO_TIMER));
    let delay_timer = MicrosecondTimer::new(
        p.TIMER1,
        &sysctl,
        PeriodicTimerSetup::microsecond(DELAY_TIMER, config.clock_hz),
    );

    Board {
        trigger,
        capture,
        delay_timer,
        red,
        green,
        blue,
    }
}
