//! Shared timer configuration state.
//!
//! Countdown and interval are the only mutable state shared between the
//! control surface and the timer engine. Each is an independent atomic
//! scalar; readers observe whatever value is current at the instant of the
//! load, and no cross-field consistency is guaranteed between the two.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

/// Default number of re-firings before the timer stops.
pub const DEFAULT_COUNTDOWN: i64 = 5;

/// Default spacing between firings, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 200;

/// The countdown counter and firing interval, shared between the control
/// surface (writer) and the timer engine (reader, and writer of the
/// countdown's once-per-firing decrement).
///
/// A negative countdown never reaches zero by decrement, so the timer runs
/// indefinitely; this mirrors the stop condition being an exact-zero test.
#[derive(Debug)]
pub struct TimerConfig {
    countdown: AtomicI64,
    interval_ms: AtomicU64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN, DEFAULT_INTERVAL_MS)
    }
}

impl TimerConfig {
    pub fn new(countdown: i64, interval_ms: u64) -> Self {
        Self {
            countdown: AtomicI64::new(countdown),
            interval_ms: AtomicU64::new(interval_ms),
        }
    }

    pub fn countdown(&self) -> i64 {
        self.countdown.load(Ordering::Relaxed)
    }

    /// Overwrites the countdown. A write can resurrect an exhausted timer
    /// only if it lands before the engine observes zero at its next firing.
    pub fn set_countdown(&self, value: i64) {
        self.countdown.store(value, Ordering::Relaxed);
    }

    /// Decrements the countdown by one firing. Called only by the engine.
    pub fn decrement_countdown(&self) {
        self.countdown.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.load(Ordering::Relaxed)
    }

    /// Overwrites the interval. Takes effect when the engine computes its
    /// next deadline, not for the in-flight firing.
    pub fn set_interval_ms(&self, value: u64) {
        self.interval_ms.store(value, Ordering::Relaxed);
    }

    /// Current interval as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }
}
