//! Timer engine.
//!
//! Owns the single timer registration: a dedicated thread that waits on an
//! absolute monotonic deadline and, on every firing, decides whether to
//! rearm or stop based on the shared countdown. The per-firing decision is a
//! pure function of (countdown, interval, actual fire time); the only side
//! effects of a firing are the countdown decrement and the diagnostic
//! emission. Deadlines are drift-corrected: the next one is computed from
//! the actual firing time, not the previously scheduled one, so rescheduling
//! overhead never accumulates into schedule skew.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::config::TimerConfig;

/// Lifecycle of one engine instance.
///
/// `Stopped` and `Disarmed` are terminal; rearming requires starting a new
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Disarmed,
    Armed,
    Firing,
    Stopped,
}

/// Outcome of a single firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Rearm for the given deadline.
    Continue { next_deadline: Instant },
    /// Countdown exhausted; do not rearm.
    Stop,
}

/// Diagnostic observation emitted once per firing.
#[derive(Debug, Clone)]
pub struct FireRecord {
    /// 1-based firing sequence number.
    pub seq: u64,
    /// Monotonic time since the engine was armed.
    pub uptime: Duration,
    /// Countdown value observed before any decrement.
    pub countdown_before: i64,
    /// Whether this firing rearmed the timer.
    pub rearmed: bool,
}

/// Observation hook invoked for every firing, after the decision is made
/// but while the engine is still in the `Firing` state.
pub type FireHook = Arc<dyn Fn(&FireRecord) + Send + Sync>;

/// Per-firing decision.
///
/// A non-zero countdown means continue, with the next deadline at
/// `fired_at + interval`. A zero countdown means stop. A negative countdown
/// is therefore never exhausted by decrement and keeps the timer running
/// indefinitely.
pub fn on_fire(countdown: i64, interval: Duration, fired_at: Instant) -> Decision {
    if countdown != 0 {
        Decision::Continue {
            next_deadline: fired_at + interval,
        }
    } else {
        Decision::Stop
    }
}

struct Shared {
    cancelled: Mutex<bool>,
    wake: Condvar,
    state: Mutex<EngineState>,
}

impl Shared {
    fn set_state(&self, state: EngineState) {
        *self.state.lock() = state;
    }
}

/// Handle to the armed timer thread.
///
/// Dropping the handle cancels the timer and joins the thread; any firing
/// in progress completes before the join returns, so no callback execution
/// outlives the handle.
pub struct TimerEngine {
    shared: Arc<Shared>,
    thread: Option<JoinHandle<()>>,
}

impl TimerEngine {
    /// Arms the timer with its first deadline at `now + interval` and spawns
    /// the engine thread.
    pub fn spawn(config: Arc<TimerConfig>, hook: Option<FireHook>) -> Self {
        let shared = Arc::new(Shared {
            cancelled: Mutex::new(false),
            wake: Condvar::new(),
            state: Mutex::new(EngineState::Armed),
        });

        let thread_shared = Arc::clone(&shared);
        let thread = thread::spawn(move || run(thread_shared, config, hook));

        Self {
            shared,
            thread: Some(thread),
        }
    }

    pub fn state(&self) -> EngineState {
        *self.shared.state.lock()
    }

    /// Cancels the timer and blocks until the engine thread has exited.
    ///
    /// Returns `true` if the timer was still armed or firing when the
    /// cancellation was requested.
    pub fn shutdown(self) -> bool {
        let was_armed = matches!(self.state(), EngineState::Armed | EngineState::Firing);
        drop(self);
        was_armed
    }

    fn request_cancel(&self) {
        let mut cancelled = self.shared.cancelled.lock();
        *cancelled = true;
        self.shared.wake.notify_all();
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        self.request_cancel();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run(shared: Arc<Shared>, config: Arc<TimerConfig>, hook: Option<FireHook>) {
    let started = Instant::now();
    let mut deadline = started + config.interval();
    let mut seq: u64 = 0;

    loop {
        {
            let mut cancelled = shared.cancelled.lock();
            while !*cancelled {
                if shared.wake.wait_until(&mut cancelled, deadline).timed_out() {
                    break;
                }
            }
            if *cancelled {
                shared.set_state(EngineState::Disarmed);
                return;
            }
        }

        shared.set_state(EngineState::Firing);
        let fired_at = Instant::now();
        let countdown = config.countdown();
        let decision = on_fire(countdown, config.interval(), fired_at);
        if let Decision::Continue { .. } = decision {
            config.decrement_countdown();
        }

        seq += 1;
        let record = FireRecord {
            seq,
            uptime: fired_at.duration_since(started),
            countdown_before: countdown,
            rearmed: matches!(decision, Decision::Continue { .. }),
        };
        log::debug!(
            "timer fired: seq={} uptime={}ms countdown={}",
            record.seq,
            record.uptime.as_millis(),
            record.countdown_before
        );
        if let Some(hook) = &hook {
            hook(&record);
        }

        match decision {
            Decision::Continue { next_deadline } => {
                deadline = next_deadline;
                shared.set_state(EngineState::Armed);
            }
            Decision::Stop => {
                log::info!("countdown exhausted after {seq} firings, timer stopped");
                shared.set_state(EngineState::Stopped);
                return;
            }
        }
    }
}
