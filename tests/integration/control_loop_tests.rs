//! The indicator loop end to end on the simulated bench.

use crate::sim_hw::{Bench, Echo, Led, Shared, SimCapture, SimLed, SimTimer, SimTrigger};
use hcsr04_capture::{Config, Hcsr04, Indicator, LedState, RangeIndicator, TimerDelay, WaitLimit};

type Loop = RangeIndicator<SimTrigger, SimCapture, TimerDelay<SimTimer>, SimLed, SimLed, SimLed>;

fn range_indicator(bench: &Shared, config: Config) -> Loop {
    let sensor = Hcsr04::new(
        SimTrigger(bench.clone()),
        SimCapture(bench.clone()),
        config,
        TimerDelay::new(SimTimer(bench.clone())),
    );
    let leds = Indicator::new(
        SimLed(bench.clone(), Led::Red),
        SimLed(bench.clone(), Led::Green),
        SimLed(bench.clone(), Led::Blue),
    );
    RangeIndicator::new(sensor, leds)
}

/// An echo reading as `inches` plus less than one tick with the default config, so whole
/// inches come out as given.
fn echo_for(inches: f64) -> Echo {
    let ticks = libm::ceil(inches / Config::default().scale_factor()) as u32;
    Echo::Pulse {
        rise: 1_000,
        fall: 1_000 + ticks,
    }
}

#[test]
fn one_iteration_lights_red_for_the_reference_echo() {
    let bench = Bench::shared();
    bench.borrow_mut().script([Echo::Pulse { rise: 0, fall: 1000 }]);
    let mut range = range_indicator(&bench, Config::default());

    let reading = range.step().unwrap();
    assert_eq!(reading.state, LedState::Red);
    assert_eq!(bench.borrow().lit(), vec![Led::Red]);
}

#[test]
fn each_iteration_is_throttled_by_ten_milliseconds() {
    let bench = Bench::shared();
    bench.borrow_mut().script([echo_for(30.0), echo_for(30.0)]);
    let mut range = range_indicator(&bench, Config::default());

    range.step().unwrap();
    assert_eq!(bench.borrow().period_clears, 24 + 10_000);
    range.step().unwrap();
    assert_eq!(bench.borrow().period_clears, 2 * (24 + 10_000));
}

#[test]
fn walking_towards_the_sensor_steps_through_the_bands() {
    let bench = Bench::shared();
    let walk = [40.0, 25.0, 24.0, 20.0, 12.0, 8.0, 6.0, 2.0];
    bench.borrow_mut().script(walk.map(echo_for));
    let mut range = range_indicator(&bench, Config::default());

    let expected = [
        (LedState::Off, vec![]),
        (LedState::Off, vec![]),
        (LedState::Green, vec![Led::Green]),
        (LedState::Green, vec![Led::Green]),
        (LedState::Blue, vec![Led::Blue]),
        (LedState::Blue, vec![Led::Blue]),
        (LedState::Red, vec![Led::Red]),
        (LedState::Red, vec![Led::Red]),
    ];
    for (inches, (state, lit)) in walk.iter().zip(expected) {
        let reading = range.step().unwrap();
        assert_eq!(reading.state, state, "at {inches} in");
        assert_eq!(bench.borrow().lit(), lit, "at {inches} in");
    }
}

#[test]
fn fraction_of_an_inch_past_a_threshold_keeps_the_nearer_band() {
    let bench = Bench::shared();
    // 24.00003in, 12.00002in and 6.00001in
    bench.borrow_mut().script([
        Echo::Pulse { rise: 0, fall: 65_284 },
        Echo::Pulse { rise: 0, fall: 32_642 },
        Echo::Pulse { rise: 0, fall: 16_321 },
    ]);
    let mut range = range_indicator(&bench, Config::default());

    for (state, led) in [
        (LedState::Green, Led::Green),
        (LedState::Blue, Led::Blue),
        (LedState::Red, Led::Red),
    ] {
        assert_eq!(range.step().unwrap().state, state);
        assert_eq!(bench.borrow().lit(), vec![led]);
    }
}

#[test]
fn never_more_than_one_led_lit() {
    let bench = Bench::shared();
    let walk = [3.0, 30.0, 9.0, 15.0, 1.0, 11.0, 23.0, 5.0];
    bench.borrow_mut().script(walk.map(echo_for));
    let mut range = range_indicator(&bench, Config::default());
    for _ in walk {
        range.step().unwrap();
    }

    let bench = bench.borrow();
    assert!(!bench.led_snapshots.is_empty());
    for snapshot in &bench.led_snapshots {
        assert!(snapshot.iter().filter(|on| **on).count() <= 1, "{snapshot:?}");
    }
}

#[test]
fn lost_echo_turns_the_leds_off_and_the_loop_continues() {
    let bench = Bench::shared();
    bench
        .borrow_mut()
        .script([echo_for(3.0), Echo::Silent, echo_for(10.0)]);
    let config = Config {
        echo_wait: WaitLimit::Polls(10_000),
        ..Config::default()
    };
    let mut range = range_indicator(&bench, config);

    assert_eq!(range.step().unwrap().state, LedState::Red);
    assert_eq!(range.step().unwrap().state, LedState::Off);
    assert!(bench.borrow().lit().is_empty());
    assert_eq!(range.step().unwrap().state, LedState::Blue);
}
