#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::info;
use hcsr04_capture::{Config, Hcsr04, Indicator, RangeIndicator, TimerDelay};
use {defmt_rtt as _, panic_probe as _};

mod gptm;
mod peripherals;
mod port;

#[entry]
fn main() -> ! {
    let p = tm4c123x::Peripherals::take().unwrap();
    info!("Running!");

    let config = Config::default();
    let board = peripherals::init(p, &config);

    let sensor = Hcsr04::new(
        board.trigger,
        board.capture,
        config,
        TimerDelay::new(board.delay_timer),
    );
    let leds = Indicator::new(board.red, board.green, board.blue);

    // Illuminate LEDs based upon distance to target: GREEN -> BLUE -> RED
    RangeIndicator::new(sensor, leds).run()
}
