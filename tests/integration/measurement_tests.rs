//! Trigger, delay and capture behaviour of the driver on the simulated bench.

use crate::sim_hw::{Bench, Echo, Shared, SimCapture, SimTimer, SimTrigger};
use embedded_hal::delay::DelayNs;
use hcsr04_capture::{Config, Edge, Error, Hcsr04, TimerDelay, WaitLimit};

type Sensor = Hcsr04<SimTrigger, SimCapture, TimerDelay<SimTimer>>;

fn sensor(bench: &Shared, config: Config) -> Sensor {
    Hcsr04::new(
        SimTrigger(bench.clone()),
        SimCapture(bench.clone()),
        config,
        TimerDelay::new(SimTimer(bench.clone())),
    )
}

fn bounded() -> Config {
    Config {
        echo_wait: WaitLimit::Polls(1_000),
        ..Config::default()
    }
}

#[test]
fn delay_us_consumes_exactly_n_periods() {
    let bench = Bench::shared();
    let mut delay = TimerDelay::new(SimTimer(bench.clone()));
    delay.delay_us(37);

    let bench = bench.borrow();
    assert_eq!(bench.period_clears, 37);
    assert_eq!(bench.now_us, 37);
    assert!(!bench.timer_running);
}

#[test]
fn delay_ms_consumes_a_thousand_periods_per_millisecond() {
    let bench = Bench::shared();
    let mut delay = TimerDelay::new(SimTimer(bench.clone()));
    delay.delay_ms(3);
    assert_eq!(bench.borrow().period_clears, 3_000);
}

#[test]
fn trigger_pulse_is_low_high_low_with_12us_holds() {
    let bench = Bench::shared();
    bench.borrow_mut().script([Echo::Pulse { rise: 0, fall: 1000 }]);
    sensor(&bench, Config::default()).measure().unwrap();

    let bench = bench.borrow();
    assert_eq!(bench.trigger_log, vec![(0, false), (12, true), (24, false)]);
    assert_eq!(bench.period_clears, 24);
    assert_eq!(bench.timer_starts, 2);
}

#[test]
fn trigger_holds_are_at_least_ten_microseconds() {
    let bench = Bench::shared();
    bench.borrow_mut().script([Echo::Pulse { rise: 0, fall: 1 }]);
    sensor(&bench, Config::default()).measure().unwrap();

    let log = bench.borrow().trigger_log.clone();
    let levels: Vec<bool> = log.iter().map(|(_, high)| *high).collect();
    assert_eq!(levels, [false, true, false]);
    for pair in log.windows(2) {
        assert!(pair[1].0 - pair[0].0 >= 10, "hold too short: {pair:?}");
    }
}

#[test]
fn short_trigger_pulse_gets_no_echo() {
    let bench = Bench::shared();
    bench.borrow_mut().script([Echo::Pulse { rise: 0, fall: 1000 }]);
    let config = Config {
        trigger_pulse_us: 5,
        ..bounded()
    };
    assert_eq!(
        sensor(&bench, config).measure(),
        Err(Error::Timeout(Edge::Rising))
    );
}

#[test]
fn reference_echo_is_about_a_third_of_an_inch() {
    let bench = Bench::shared();
    bench.borrow_mut().script([Echo::Pulse { rise: 0, fall: 1000 }]);
    let distance = sensor(&bench, Config::default()).measure().unwrap();
    assert!((distance.as_inches() - 0.3676).abs() < 1e-4);
    assert_eq!(bench.borrow().capture_clears, 2);
}

#[test]
fn consecutive_measurements_use_fresh_edges() {
    let bench = Bench::shared();
    bench.borrow_mut().script([
        Echo::Pulse { rise: 100, fall: 1_100 },
        Echo::Pulse { rise: 5_000, fall: 5_250 },
    ]);
    let mut sensor = sensor(&bench, Config::default());
    assert_eq!(sensor.measure_ticks(), Ok(1_000));
    assert_eq!(sensor.measure_ticks(), Ok(250));
}

#[test]
fn silent_sensor_times_out_on_the_rising_edge() {
    let bench = Bench::shared();
    bench.borrow_mut().script([Echo::Silent]);
    assert_eq!(
        sensor(&bench, bounded()).measure(),
        Err(Error::Timeout(Edge::Rising))
    );
}

// Excluded guarantee: a capture counter wrapping between the two edges is not detected.
// The wrapping difference is reported as is.
#[test]
fn wrapped_capture_counter_reads_as_a_huge_distance() {
    let bench = Bench::shared();
    bench.borrow_mut().script([Echo::Pulse { rise: 65_500, fall: 300 }]);
    let mut sensor = sensor(&bench, Config::default());
    let distance = sensor.measure().unwrap();
    assert!(distance.as_inches() > 1_000_000.0);
}
