//! # pacer
//!
//! A re-arming high-resolution timer with operator-writable control points.
//! One timer instance counts down a fixed number of re-firings; while it is
//! armed, an operator can observe and mutate the countdown and the firing
//! interval through named control points.
//!
//! ## Module overview
//! - [`config`]  – Shared countdown/interval state.
//! - [`parse`]   – Bounded base-10 input validation.
//! - [`engine`]  – Timer thread, rearm/stop decisions, blocking cancellation.
//! - [`status`]  – Read-only textual snapshot.
//! - [`control`] – Named control-point registry.
//! - [`service`] – Startup/shutdown wiring.
//!
//! The countdown and interval are independent atomic scalars; the timer
//! callback reads whatever values are current when it fires, and no ordering
//! is enforced between an operator write and an imminent firing.

pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod parse;
pub mod service;
pub mod status;

pub use config::{TimerConfig, DEFAULT_COUNTDOWN, DEFAULT_INTERVAL_MS};
pub use control::{Access, ControlPoint, ControlRegistry};
pub use engine::{Decision, EngineState, FireHook, FireRecord, TimerEngine};
pub use error::ControlError;
pub use parse::MAX_INPUT;
pub use service::{ServiceConfig, ServiceConfigBuilder, TimerService};

#[cfg(test)]
mod tests;
