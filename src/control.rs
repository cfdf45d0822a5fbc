//! Control surface.
//!
//! Exposes the configuration state as named, independently accessible
//! control points: a read-only status snapshot and two privileged,
//! write-only integer fields. The registry enforces access direction;
//! enforcing the privilege flag is left to the host transport that carries
//! operator requests (the registry only carries the metadata).

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::TimerConfig;
use crate::error::ControlError;
use crate::parse;
use crate::status;

/// Name of the read-only status point.
pub const STATUS: &str = "status";
/// Name of the write-only countdown point.
pub const COUNTDOWN_CONTROL: &str = "countdown-control";
/// Name of the write-only interval point.
pub const INTERVAL_CONTROL: &str = "interval-control";

/// Access direction of a control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
}

/// A named endpoint bound to some piece of shared state.
///
/// Points are stateless between invocations apart from the configuration
/// they touch. The default method bodies reject the unsupported direction,
/// so a point only implements the direction its access mode allows.
pub trait ControlPoint: Send + Sync {
    fn name(&self) -> &'static str;

    fn access(&self) -> Access;

    /// Whether writes to this point are restricted to privileged callers.
    fn privileged(&self) -> bool {
        false
    }

    fn read(&self) -> Result<String, ControlError> {
        Err(ControlError::NotReadable(self.name()))
    }

    fn write(&self, _input: &[u8]) -> Result<usize, ControlError> {
        Err(ControlError::NotWritable(self.name()))
    }
}

/// Name-indexed collection of control points.
#[derive(Default)]
pub struct ControlRegistry {
    points: BTreeMap<&'static str, Arc<dyn ControlPoint>>,
}

impl ControlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a point under its name. Duplicate or empty names fail with
    /// [`ControlError::RegistrationFailure`].
    pub fn register(&mut self, point: Arc<dyn ControlPoint>) -> Result<(), ControlError> {
        let name = point.name();
        if name.is_empty() || self.points.contains_key(name) {
            return Err(ControlError::RegistrationFailure(name));
        }
        self.points.insert(name, point);
        Ok(())
    }

    pub fn read(&self, name: &str) -> Result<String, ControlError> {
        self.lookup(name)?.read()
    }

    pub fn write(&self, name: &str, input: &[u8]) -> Result<usize, ControlError> {
        self.lookup(name)?.write(input)
    }

    /// Iterates over the registered points in name order.
    pub fn points(&self) -> impl Iterator<Item = &Arc<dyn ControlPoint>> {
        self.points.values()
    }

    fn lookup(&self, name: &str) -> Result<&Arc<dyn ControlPoint>, ControlError> {
        self.points
            .get(name)
            .ok_or_else(|| ControlError::NotFound(name.to_owned()))
    }
}

/// Read-only snapshot of the configuration state.
pub struct StatusPoint {
    config: Arc<TimerConfig>,
}

impl StatusPoint {
    pub fn new(config: Arc<TimerConfig>) -> Arc<Self> {
        Arc::new(Self { config })
    }
}

impl ControlPoint for StatusPoint {
    fn name(&self) -> &'static str {
        STATUS
    }

    fn access(&self) -> Access {
        Access::ReadOnly
    }

    fn read(&self) -> Result<String, ControlError> {
        Ok(status::render(&self.config))
    }
}

/// Write-only point updating the countdown.
pub struct CountdownPoint {
    config: Arc<TimerConfig>,
}

impl CountdownPoint {
    pub fn new(config: Arc<TimerConfig>) -> Arc<Self> {
        Arc::new(Self { config })
    }
}

impl ControlPoint for CountdownPoint {
    fn name(&self) -> &'static str {
        COUNTDOWN_CONTROL
    }

    fn access(&self) -> Access {
        Access::WriteOnly
    }

    fn privileged(&self) -> bool {
        true
    }

    fn write(&self, input: &[u8]) -> Result<usize, ControlError> {
        let (value, consumed) = parse::parse_signed(input)?;
        self.config.set_countdown(value);
        log::debug!("countdown set to {value}");
        Ok(consumed)
    }
}

/// Write-only point updating the firing interval in milliseconds.
pub struct IntervalPoint {
    config: Arc<TimerConfig>,
}

impl IntervalPoint {
    pub fn new(config: Arc<TimerConfig>) -> Arc<Self> {
        Arc::new(Self { config })
    }
}

impl ControlPoint for IntervalPoint {
    fn name(&self) -> &'static str {
        INTERVAL_CONTROL
    }

    fn access(&self) -> Access {
        Access::WriteOnly
    }

    fn privileged(&self) -> bool {
        true
    }

    fn write(&self, input: &[u8]) -> Result<usize, ControlError> {
        let (value, consumed) = parse::parse_unsigned(input)?;
        self.config.set_interval_ms(value);
        log::debug!("interval set to {value} ms");
        Ok(consumed)
    }
}
