use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::TimerConfig;
use crate::engine::{on_fire, Decision, EngineState, TimerEngine};

#[test]
fn nonzero_countdown_continues_with_drift_corrected_deadline() {
    let fired_at = Instant::now();
    let interval = Duration::from_millis(200);

    match on_fire(5, interval, fired_at) {
        Decision::Continue { next_deadline } => {
            // Relative to the actual fire time, not any earlier schedule.
            assert_eq!(next_deadline, fired_at + interval);
        }
        Decision::Stop => panic!("countdown 5 must rearm"),
    }
}

#[test]
fn zero_countdown_stops() {
    let decision = on_fire(0, Duration::from_millis(200), Instant::now());
    assert_eq!(decision, Decision::Stop);
}

#[test]
fn negative_countdown_never_stops() {
    let fired_at = Instant::now();
    let interval = Duration::from_millis(10);
    for countdown in [-1, -100, i64::MIN] {
        assert!(matches!(
            on_fire(countdown, interval, fired_at),
            Decision::Continue { .. }
        ));
    }
}

#[test]
fn interval_write_takes_effect_at_next_deadline() {
    let config = TimerConfig::new(3, 200);
    let fired_at = Instant::now();

    // A write lands between two firings; the next deadline computation
    // observes the new value.
    config.set_interval_ms(50);
    match on_fire(config.countdown(), config.interval(), fired_at) {
        Decision::Continue { next_deadline } => {
            assert_eq!(next_deadline, fired_at + Duration::from_millis(50));
        }
        Decision::Stop => panic!("countdown 3 must rearm"),
    }
}

#[test]
fn countdown_exhausts_through_decrement() {
    let config = TimerConfig::new(2, 10);
    let interval = config.interval();

    let mut decisions = Vec::new();
    loop {
        let decision = on_fire(config.countdown(), interval, Instant::now());
        if let Decision::Continue { .. } = decision {
            config.decrement_countdown();
            decisions.push(true);
        } else {
            decisions.push(false);
            break;
        }
    }

    assert_eq!(decisions, vec![true, true, false]);
    assert_eq!(config.countdown(), 0);
}

#[test]
fn cancel_before_first_fire_disarms() {
    let config = Arc::new(TimerConfig::new(5, 60_000));
    let engine = TimerEngine::spawn(Arc::clone(&config), None);

    let before = Instant::now();
    let was_armed = engine.shutdown();
    assert!(was_armed);
    // Nothing was firing, so the cancellation must not wait out the interval.
    assert!(before.elapsed() < Duration::from_secs(5));
    assert_eq!(config.countdown(), 5);
}

#[test]
fn exhausted_engine_reports_stopped() {
    let config = Arc::new(TimerConfig::new(0, 1));
    let engine = TimerEngine::spawn(Arc::clone(&config), None);

    let deadline = Instant::now() + Duration::from_secs(5);
    while engine.state() != EngineState::Stopped && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(engine.state(), EngineState::Stopped);
    assert!(!engine.shutdown());
}
