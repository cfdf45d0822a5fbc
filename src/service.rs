//! Service wiring.
//!
//! Brings the pieces up in the order the operator expects: control points
//! are registered first, then the timer is armed. A registration failure is
//! fatal and the timer is never started. Shutdown reverses the order by
//! cancelling the timer and blocking until any in-flight firing completes.

use std::sync::Arc;

use crate::config::{TimerConfig, DEFAULT_COUNTDOWN, DEFAULT_INTERVAL_MS};
use crate::control::{ControlRegistry, CountdownPoint, IntervalPoint, StatusPoint};
use crate::engine::{EngineState, FireHook, TimerEngine};
use crate::error::ControlError;

/// Startup configuration for a [`TimerService`].
pub struct ServiceConfig {
    /// Initial number of re-firings before the timer stops.
    pub countdown: i64,
    /// Initial spacing between firings, in milliseconds.
    pub interval_ms: u64,
    /// Optional per-firing observation hook.
    pub fire_hook: Option<FireHook>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            countdown: DEFAULT_COUNTDOWN,
            interval_ms: DEFAULT_INTERVAL_MS,
            fire_hook: None,
        }
    }
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

/// Builder for ergonomic service configuration construction.
#[derive(Default)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    pub fn countdown(mut self, countdown: i64) -> Self {
        self.config.countdown = countdown;
        self
    }

    pub fn interval_ms(mut self, interval_ms: u64) -> Self {
        self.config.interval_ms = interval_ms;
        self
    }

    pub fn fire_hook(mut self, hook: FireHook) -> Self {
        self.config.fire_hook = Some(hook);
        self
    }

    pub fn build(self) -> ServiceConfig {
        self.config
    }
}

/// One timer instance plus its control surface.
pub struct TimerService {
    config: Arc<TimerConfig>,
    registry: ControlRegistry,
    engine: Option<TimerEngine>,
}

impl TimerService {
    /// Registers the control points and arms the timer.
    ///
    /// The first deadline is `now + interval`. If any control point cannot
    /// be registered the service never becomes operational and the timer is
    /// not armed.
    pub fn start(cfg: ServiceConfig) -> Result<Self, ControlError> {
        let config = Arc::new(TimerConfig::new(cfg.countdown, cfg.interval_ms));

        let mut registry = ControlRegistry::new();
        registry.register(StatusPoint::new(Arc::clone(&config)))?;
        registry.register(CountdownPoint::new(Arc::clone(&config)))?;
        registry.register(IntervalPoint::new(Arc::clone(&config)))?;

        log::info!(
            "timer service starting: countdown={} first fire in {} ms",
            cfg.countdown,
            cfg.interval_ms
        );
        let engine = TimerEngine::spawn(Arc::clone(&config), cfg.fire_hook);

        Ok(Self {
            config,
            registry,
            engine: Some(engine),
        })
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn engine_state(&self) -> EngineState {
        self.engine
            .as_ref()
            .map(TimerEngine::state)
            .unwrap_or(EngineState::Disarmed)
    }

    /// Disarms the timer, blocking until any in-flight firing completes.
    pub fn shutdown(mut self) {
        if let Some(engine) = self.engine.take() {
            if engine.shutdown() {
                log::info!("timer was still armed at shutdown");
            }
        }
        log::info!("timer service stopped");
    }
}
